mod output;
mod props;
mod render;

pub use output::{EPISODES_DIR, content_hash, episode_href, episode_page_filename, publish};
pub use props::{HomeProps, PROPS_FILENAME, REVALIDATE_SECONDS};
pub use render::{render_episode, render_home};
