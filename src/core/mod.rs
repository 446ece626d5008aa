//! Cropping logic: the external tool and the swap around it.

pub mod crop;
pub mod tool;

pub use crop::crop_pdf;
pub use tool::CropTool;
