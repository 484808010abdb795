//! Shared test utilities — builders, a scriptable mock gateway, DB setup.
//!
//! Available only under `#[cfg(test)]`.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::analytics::CreatorAnalytics;
use crate::error::{MarketError, MarketResult};
use crate::gateway::{MarketplaceGateway, MarketplaceHost, ProgramCache};
use crate::post::FeedPost;
use crate::program::{Author, CustomProgramRecord, ProgramSummary, Visibility};
use crate::storage::migrations;

// ============================================================================
// ProgramBuilder
// ============================================================================

pub struct ProgramBuilder {
    program: ProgramSummary,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self {
            program: ProgramSummary {
                id: 1,
                name: "Test program".to_string(),
                description: String::new(),
                weeks: 4,
                days_per_week: 3,
                visibility: Visibility::InviteOnly,
                subscriber_count: 0,
                avg_rating: None,
                rating_count: 0,
                is_builtin: false,
                author: Author {
                    name: "coach".to_string(),
                    emoji: "💪".to_string(),
                },
                program_data: None,
            },
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.program.id = id;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.program.name = name.to_string();
        self
    }

    pub fn subscribers(mut self, n: u32) -> Self {
        self.program.subscriber_count = n;
        self
    }

    pub fn avg_rating(mut self, r: f64) -> Self {
        self.program.avg_rating = Some(r);
        self
    }

    pub fn ratings(mut self, n: u32) -> Self {
        self.program.rating_count = n;
        self
    }

    pub fn program_data(mut self, data: serde_json::Value) -> Self {
        self.program.program_data = Some(data);
        self
    }

    pub fn build(self) -> ProgramSummary {
        self.program
    }
}

// ============================================================================
// PostBuilder
// ============================================================================

pub struct PostBuilder {
    post: FeedPost,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            post: FeedPost {
                id: 1,
                author: Author {
                    name: "lifter".to_string(),
                    emoji: "🏋".to_string(),
                },
                message: "test post".to_string(),
                created_at: Utc::now(),
                is_pinned: false,
            },
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.post.id = id;
        self
    }

    pub fn at(mut self, rfc3339: &str) -> Self {
        self.post.created_at = rfc3339.parse::<DateTime<Utc>>().unwrap();
        self
    }

    pub fn pinned(mut self) -> Self {
        self.post.is_pinned = true;
        self
    }

    pub fn pinned_if(mut self, pinned: bool) -> Self {
        self.post.is_pinned = pinned;
        self
    }

    pub fn build(self) -> FeedPost {
        self.post
    }
}

// ============================================================================
// MockGateway
// ============================================================================

/// Call log exposed alongside the mock so tests can assert how often and
/// with what the gateway was hit.
#[derive(Default)]
pub struct CallLog {
    resolve_invite: Mutex<u32>,
    subscribe: Mutex<Vec<i64>>,
    get_feed: Mutex<u32>,
    post_to_feed: Mutex<Vec<String>>,
}

impl CallLog {
    pub fn resolve_invite(&self) -> u32 {
        *self.resolve_invite.lock().unwrap()
    }

    pub fn subscribe(&self) -> u32 {
        self.subscribe.lock().unwrap().len() as u32
    }

    pub fn subscribed_ids(&self) -> Vec<i64> {
        self.subscribe.lock().unwrap().clone()
    }

    pub fn get_feed(&self) -> u32 {
        *self.get_feed.lock().unwrap()
    }

    pub fn post_to_feed(&self) -> u32 {
        self.post_to_feed.lock().unwrap().len() as u32
    }

    pub fn posted_messages(&self) -> Vec<String> {
        self.post_to_feed.lock().unwrap().clone()
    }
}

/// Scriptable in-memory gateway. Defaults: unknown invites resolve to
/// None, feeds are empty, analytics unsupported, nothing published.
#[derive(Default)]
pub struct MockGateway {
    pub calls: CallLog,
    invites: HashMap<String, ProgramSummary>,
    feeds: HashMap<i64, Vec<FeedPost>>,
    published: Vec<ProgramSummary>,
    analytics: Option<CreatorAnalytics>,
    fail_resolve: Option<String>,
    fail_subscribe: Option<String>,
    fail_feed: Option<String>,
    fail_post: Option<String>,
    fail_analytics: Option<String>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_invite(mut self, token: &str, program: ProgramSummary) -> Self {
        self.invites.insert(token.to_string(), program);
        self
    }

    pub fn with_feed(mut self, program_id: i64, posts: Vec<FeedPost>) -> Self {
        self.feeds.insert(program_id, posts);
        self
    }

    pub fn with_published(mut self, programs: Vec<ProgramSummary>) -> Self {
        self.published = programs;
        self
    }

    pub fn with_analytics(mut self, analytics: CreatorAnalytics) -> Self {
        self.analytics = Some(analytics);
        self
    }

    pub fn failing_resolve(mut self, msg: &str) -> Self {
        self.fail_resolve = Some(msg.to_string());
        self
    }

    pub fn failing_subscribe(mut self, msg: &str) -> Self {
        self.fail_subscribe = Some(msg.to_string());
        self
    }

    pub fn failing_feed(mut self, msg: &str) -> Self {
        self.fail_feed = Some(msg.to_string());
        self
    }

    pub fn failing_post(mut self, msg: &str) -> Self {
        self.fail_post = Some(msg.to_string());
        self
    }

    pub fn failing_analytics(mut self, msg: &str) -> Self {
        self.fail_analytics = Some(msg.to_string());
        self
    }
}

impl MarketplaceGateway for MockGateway {
    fn resolve_invite(&self, token: &str) -> MarketResult<Option<ProgramSummary>> {
        *self.calls.resolve_invite.lock().unwrap() += 1;
        if let Some(msg) = &self.fail_resolve {
            return Err(MarketError::Gateway(msg.clone()));
        }
        Ok(self.invites.get(token).cloned())
    }

    fn subscribe(&self, program_id: i64) -> MarketResult<()> {
        self.calls.subscribe.lock().unwrap().push(program_id);
        if let Some(msg) = &self.fail_subscribe {
            return Err(MarketError::Gateway(msg.clone()));
        }
        Ok(())
    }

    fn get_feed(&self, program_id: i64) -> MarketResult<Vec<FeedPost>> {
        *self.calls.get_feed.lock().unwrap() += 1;
        if let Some(msg) = &self.fail_feed {
            return Err(MarketError::Gateway(msg.clone()));
        }
        Ok(self.feeds.get(&program_id).cloned().unwrap_or_default())
    }

    fn post_to_feed(&self, _program_id: i64, message: &str) -> MarketResult<()> {
        self.calls.post_to_feed.lock().unwrap().push(message.to_string());
        if let Some(msg) = &self.fail_post {
            return Err(MarketError::Gateway(msg.clone()));
        }
        Ok(())
    }

    fn get_analytics(&self) -> MarketResult<Option<CreatorAnalytics>> {
        if let Some(msg) = &self.fail_analytics {
            return Err(MarketError::Gateway(msg.clone()));
        }
        Ok(self.analytics.clone())
    }

    fn my_published(&self) -> MarketResult<Vec<ProgramSummary>> {
        Ok(self.published.clone())
    }
}

// ============================================================================
// Host / cache doubles
// ============================================================================

#[derive(Default)]
pub struct RecordingHost {
    pub backs: usize,
    pub joined: Vec<ProgramSummary>,
    pub selected: Vec<ProgramSummary>,
}

impl MarketplaceHost for RecordingHost {
    fn on_back(&mut self) {
        self.backs += 1;
    }

    fn on_joined(&mut self, program: &ProgramSummary) {
        self.joined.push(program.clone());
    }

    fn on_select_program(&mut self, program: &ProgramSummary) {
        self.selected.push(program.clone());
    }
}

#[derive(Default)]
pub struct RecordingCache {
    saved: Mutex<Vec<CustomProgramRecord>>,
    fail: bool,
}

impl RecordingCache {
    pub fn failing() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn saved(&self) -> Vec<CustomProgramRecord> {
        self.saved.lock().unwrap().clone()
    }
}

impl ProgramCache for RecordingCache {
    fn save_custom_program(&self, record: &CustomProgramRecord) -> MarketResult<()> {
        if self.fail {
            return Err(MarketError::Storage("cache disk full".to_string()));
        }
        self.saved.lock().unwrap().push(record.clone());
        Ok(())
    }
}

// ============================================================================
// DB setup
// ============================================================================

/// Create an in-memory cache DB with all migrations applied.
pub fn setup_cache_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA foreign_keys=ON;").unwrap();
    migrations::migrate(&conn).unwrap();
    conn
}

/// Cache record for a program that carries a `program_data` blob.
pub fn record_for(program: &ProgramSummary) -> CustomProgramRecord {
    CustomProgramRecord::from_summary(program).expect("program carries no data blob")
}
