///! This module includes common things we can reuse across the stylesheet languages we handle (css, less)

pub mod text_position;
