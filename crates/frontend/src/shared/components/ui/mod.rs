pub mod file_input;
pub mod input;
pub mod select;
pub mod textarea;

pub use file_input::ImageInput;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
