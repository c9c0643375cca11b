mod page_shell;
pub use page_shell::{PageShell, SaverHandle};

mod video_player;
pub use video_player::VideoPlayer;
