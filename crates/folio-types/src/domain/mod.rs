pub mod category;
pub mod locale;
pub mod media;
pub mod project;
pub mod status;

pub use category::*;
pub use locale::*;
pub use media::*;
pub use project::*;
pub use status::*;
