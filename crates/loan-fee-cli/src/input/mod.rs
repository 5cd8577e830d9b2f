pub mod file;
pub mod stdin;

use serde::Deserialize;

use loan_fee_core::FeeRequest;

/// A batch payload: either a single request or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum RequestPayload {
    One(FeeRequest),
    Many(Vec<FeeRequest>),
}

impl From<RequestPayload> for Vec<FeeRequest> {
    fn from(payload: RequestPayload) -> Self {
        match payload {
            RequestPayload::One(req) => vec![req],
            RequestPayload::Many(reqs) => reqs,
        }
    }
}

fn parse_json(contents: &str) -> Result<Vec<FeeRequest>, serde_json::Error> {
    serde_json::from_str::<RequestPayload>(contents).map(Vec::from)
}

fn parse_yaml(contents: &str) -> Result<Vec<FeeRequest>, serde_yaml::Error> {
    serde_yaml::from_str::<RequestPayload>(contents).map(Vec::from)
}
