pub mod etl;
pub mod extract;
pub mod pipeline;

pub use crate::domain::model::{
    ChecklistItem, SourceFile, TemplateRecord, TransformResult, VisualMechanical,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
