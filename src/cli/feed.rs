use anyhow::Result;
use fitmarket::constants::truncate_safe;
use fitmarket::flows::feed::FeedController;
use fitmarket::post::FeedPost;

pub fn run(config_path: Option<&str>, program_id: i64) -> Result<()> {
    let (_settings, gateway) = super::setup(config_path)?;
    let mut feed = FeedController::new(&gateway, program_id);
    feed.load();
    print_feed(feed.posts());
    Ok(())
}

pub fn post(config_path: Option<&str>, program_id: i64, message: &str) -> Result<()> {
    let (_settings, gateway) = super::setup(config_path)?;
    let mut feed = FeedController::new(&gateway, program_id);
    feed.set_draft(message);
    let before = feed.revision();
    feed.post_message();
    if feed.revision() == before {
        println!("Nothing to post (empty message).");
        return Ok(());
    }
    print_feed(feed.posts());
    Ok(())
}

fn print_feed(posts: &[FeedPost]) {
    if posts.is_empty() {
        println!("No posts yet. Start the conversation!");
        return;
    }
    for p in posts {
        let pin = if p.is_pinned { "📌 " } else { "" };
        let when = p.created_at.format("%Y-%m-%d %H:%M");
        let name = truncate_safe(&p.author.name, 20);
        println!("{}[{}] {} {}: {}", pin, when, p.author.emoji, name, p.message);
    }
    println!("\nTotal: {} posts", posts.len());
}
