pub mod client;
pub mod directory;
pub mod resolver;
pub mod selector;
pub mod types;

pub use client::K8sDirectory;
pub use directory::PodDirectory;
pub use resolver::{resolve, PodRef, ResolvedPod};
pub use selector::LabelSelector;
pub use types::{PodPhase, PodRecord};
