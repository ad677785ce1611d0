mod upload;
pub use upload::Upload;
