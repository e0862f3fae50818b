mod message_data;

pub use message_data::MessageData;
