//! Effect types that pair or defer values.
//!
//! - [`IO`]: a deferred computation, performed once on demand
//! - [`Writer`]: a value paired with an accumulated log
//!
//! ```rust
//! use promissory::effect::{IO, Writer};
//!
//! let io = IO::pure(10).fmap(|x| x * 2).flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.perform(), 21);
//!
//! let logged = Writer::tell(vec!["start"]).then(Writer::new(1, vec!["done"]));
//! assert_eq!(logged.run(), (1, vec!["start", "done"]));
//! ```

mod io;
mod writer;

pub use io::IO;
pub use writer::Writer;
