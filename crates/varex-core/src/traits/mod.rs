mod message_sink;
mod projector;
mod variable_source;

pub use message_sink::IMessageSink;
pub use projector::IProjector;
pub use variable_source::IVariableSource;
