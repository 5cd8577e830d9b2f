pub mod envelope;
pub mod error;
pub mod fees;
pub mod monetary;

pub use envelope::{Computation, Metadata};
pub use error::LoanFeeError;
pub use fees::calculator::{calculate_fee, quote_fee, FeeQuote};
pub use fees::params::{FeeRequest, LoanFeeCalculatorParams};
pub use fees::schedule::{breakpoint_bounds, schedule_for, Breakpoint, FeeSchedule};
pub use fees::term::LoanTerm;
pub use monetary::Monetary;

/// Standard result type for all loan-fee operations
pub type LoanFeeResult<T> = Result<T, LoanFeeError>;
