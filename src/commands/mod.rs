pub mod message_post;
