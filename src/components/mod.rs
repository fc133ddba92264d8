pub mod full_screen_message;
pub mod gallery;
pub mod heading;
pub mod invitation;
pub mod location;
pub mod section;
pub mod video;
pub mod wedding_page;

pub use full_screen_message::{ErrorScreenBoundary, FullScreenMessage, MessageKind};
pub use gallery::Gallery;
pub use heading::Heading;
pub use invitation::Invitation;
pub use location::LocationSection;
pub use section::Section;
pub use video::Video;
pub use wedding_page::WeddingPage;
