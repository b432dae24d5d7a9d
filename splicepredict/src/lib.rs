#[cfg(feature = "core")]
#[doc(inline)]
pub use splicepredict_core as core;

#[cfg(feature = "classify")]
#[doc(inline)]
pub use splicepredict_classify as classify;

#[cfg(feature = "io")]
#[doc(inline)]
pub use splicepredict_io as io;
