pub mod config;
pub mod presenter;
pub mod selection;
pub mod transport;

pub use config::WorkflowAdapterConfig;
pub use presenter::{ChannelPresenter, LogPresenter};
pub use selection::{load_file_handle, SelectionStore};
pub use transport::HttpTransportAdapter;
