pub mod environment;
pub mod paths;
pub mod terminal;
pub mod uri;

pub use environment::{get_viminfo_path, viminfo_path_in};
pub use paths::{format_path_with_tilde, validate_file_size};
pub use terminal::sanitize_for_terminal;
pub use uri::{enter_parent_dir, file_uri, path_from_uri};
