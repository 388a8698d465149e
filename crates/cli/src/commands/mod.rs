pub mod corpus;
pub mod relcov;
pub mod relscore;
pub mod util;

pub use corpus::*;
pub use relcov::*;
pub use relscore::*;
pub use util::*;
