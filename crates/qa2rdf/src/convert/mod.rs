//! Converters that drive the Turtle writer from dump records.
//!
//! Each converter walks one record table and emits one subject block per
//! record. Malformed records (missing ids, unparseable timestamps) are
//! logged and skipped; the conversion keeps going.

mod ontology;
pub mod records;

pub use ontology::write_ontology;
pub use records::{load_dump, LoadError, SiteDump};

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;

use crate::model::vocab::{qa, standard};
use crate::model::SiteIris;
use crate::writer::{Result, Term, TurtleWriter};
use records::{BadgeRecord, CommentRecord, PostRecord, SiteRecord, TagRecord, UserRecord};

/// Parse a dump timestamp (`2008-07-31T21:42:52.667`, no zone, implicitly
/// UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .ok()
}

/// Per-table record counts for one conversion run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertStats {
    pub users: u64,
    pub tags: u64,
    pub badges: u64,
    pub posts: u64,
    pub comments: u64,
    /// Records dropped for missing required fields or unsupported types.
    pub skipped: u64,
}

/// Converts one site dump into Turtle through a borrowed writer.
pub struct DumpConverter<'a, W: Write> {
    writer: &'a mut TurtleWriter<W>,
    iris: &'a SiteIris,
}

impl<'a, W: Write> DumpConverter<'a, W> {
    pub fn new(writer: &'a mut TurtleWriter<W>, iris: &'a SiteIris) -> Self {
        Self { writer, iris }
    }

    /// Converts every record table of the dump, site metadata first.
    pub fn convert(&mut self, dump: &SiteDump) -> Result<ConvertStats> {
        let mut stats = ConvertStats::default();
        self.convert_site(&dump.site)?;
        for user in &dump.users {
            if self.convert_user(user)? {
                stats.users += 1;
            } else {
                stats.skipped += 1;
            }
        }
        for tag in &dump.tags {
            if self.convert_tag(tag)? {
                stats.tags += 1;
            } else {
                stats.skipped += 1;
            }
        }
        let mut seen_badges = HashSet::new();
        for badge in &dump.badges {
            if self.convert_badge(badge, &mut seen_badges)? {
                stats.badges += 1;
            } else {
                stats.skipped += 1;
            }
        }
        for post in &dump.posts {
            if self.convert_post(post)? {
                stats.posts += 1;
            } else {
                stats.skipped += 1;
            }
        }
        for comment in &dump.comments {
            if self.convert_comment(comment)? {
                stats.comments += 1;
            } else {
                stats.skipped += 1;
            }
        }
        Ok(stats)
    }

    fn convert_site(&mut self, site: &SiteRecord) -> Result<()> {
        self.writer.start_triple(&self.iris.site_iri())?;
        self.writer
            .add_to_triple(standard::RDF_TYPE, [Term::iri(qa::SITE)])?;
        let label = site.long_name.as_deref().unwrap_or(&site.name);
        self.writer.add_to_triple(standard::RDFS_LABEL, [label])?;
        self.writer.add_to_triple(qa::IS_META, [site.is_meta])?;
        Ok(())
    }

    fn convert_user(&mut self, user: &UserRecord) -> Result<bool> {
        let Some(id) = user.id else {
            warn!("user record without Id, skipped");
            return Ok(false);
        };
        self.writer.start_triple(&self.iris.user_iri(id))?;
        self.writer
            .add_to_triple(standard::RDF_TYPE, [Term::iri(qa::USER)])?;
        self.link_to_site()?;
        if let Some(name) = &user.display_name {
            self.writer
                .add_to_triple(standard::RDFS_LABEL, [name.as_str()])?;
            self.writer
                .add_to_triple(standard::FOAF_NICK, [name.as_str()])?;
        }
        self.writer
            .add_to_triple(standard::DC_DATE, [self.timestamp(&user.creation_date)])?;
        self.writer
            .add_to_triple(qa::REPUTATION, [user.reputation])?;
        self.writer
            .add_to_triple(qa::LOCATION, [user.location.as_deref()])?;
        if let Some(url) = &user.website_url {
            // Anything that does not look like an absolute URL is kept as a
            // string literal rather than a broken IRI.
            if url.starts_with("http://") || url.starts_with("https://") {
                self.writer
                    .add_to_triple(standard::FOAF_HOMEPAGE, [Term::iri(url.clone())])?;
            } else {
                warn!(%url, "malformed website URL, treated as string literal");
                self.writer
                    .add_to_triple(standard::FOAF_HOMEPAGE, [url.as_str()])?;
            }
        }
        self.writer
            .add_to_triple(standard::DC_DESCRIPTION, [user.about_me.as_deref()])?;
        self.writer.add_to_triple(qa::VIEW_COUNT, [user.views])?;
        self.writer.add_to_triple(qa::UP_VOTES, [user.up_votes])?;
        self.writer
            .add_to_triple(qa::DOWN_VOTES, [user.down_votes])?;
        self.writer
            .add_to_triple(qa::LAST_SEEN, [self.timestamp(&user.last_access_date)])?;
        Ok(true)
    }

    fn convert_tag(&mut self, tag: &TagRecord) -> Result<bool> {
        let Some(name) = &tag.tag_name else {
            warn!("tag record without TagName, skipped");
            return Ok(false);
        };
        self.writer.start_triple(&self.iris.tag_iri(name))?;
        self.writer
            .add_to_triple(standard::RDF_TYPE, [Term::iri(qa::TAG)])?;
        self.writer
            .add_to_triple(standard::RDFS_LABEL, [name.as_str()])?;
        self.link_to_site()?;
        if let Some(post_id) = tag.excerpt_post_id {
            self.writer
                .add_to_triple(qa::TAG_EXCERPT, [Term::iri(self.iris.post_iri(post_id))])?;
        }
        if let Some(post_id) = tag.wiki_post_id {
            self.writer.add_to_triple(
                qa::TAG_DESCRIPTION,
                [Term::iri(self.iris.post_iri(post_id))],
            )?;
        }
        Ok(true)
    }

    /// Badge awards are anonymous nodes; the badge entity itself is written
    /// once, the first time its name appears.
    fn convert_badge(&mut self, badge: &BadgeRecord, seen: &mut HashSet<String>) -> Result<bool> {
        let (Some(user_id), Some(name)) = (badge.user_id, &badge.name) else {
            warn!("badge record without UserId or Name, skipped");
            return Ok(false);
        };
        let badge_iri = self.iris.badge_iri(name);
        if seen.insert(name.clone()) {
            self.writer.start_triple(&badge_iri)?;
            self.writer
                .add_to_triple(standard::RDF_TYPE, [Term::iri(qa::BADGE)])?;
            self.writer
                .add_to_triple(standard::RDFS_LABEL, [name.as_str()])?;
            self.link_to_site()?;
        }
        self.writer.start_anonymous_triple()?;
        self.writer
            .add_to_triple(qa::BADGE_PROP, [Term::iri(badge_iri)])?;
        self.writer
            .add_to_triple(qa::OWNER, [Term::iri(self.iris.user_iri(user_id))])?;
        self.writer
            .add_to_triple(standard::DC_DATE, [self.timestamp(&badge.date)])?;
        self.writer.finish_anonymous_node()?;
        Ok(true)
    }

    fn convert_post(&mut self, post: &PostRecord) -> Result<bool> {
        let Some(id) = post.id else {
            warn!("post record without Id, skipped");
            return Ok(false);
        };
        match post.post_type_id {
            Some(1) => {
                self.writer.start_triple(&self.iris.post_iri(id))?;
                self.writer
                    .add_to_triple(standard::RDF_TYPE, [Term::iri(qa::QUESTION)])?;
                self.writer
                    .add_to_triple(standard::DC_TITLE, [post.title.as_deref()])?;
                if let Some(answer_id) = post.accepted_answer_id {
                    self.writer.add_to_triple(
                        qa::ACCEPTED_ANSWER,
                        [Term::iri(self.iris.post_iri(answer_id))],
                    )?;
                }
                if !post.tags.is_empty() {
                    let tags: Vec<Term> = post
                        .tags
                        .iter()
                        .map(|t| Term::iri(self.iris.tag_iri(t)))
                        .collect();
                    self.writer.add_to_triple(qa::TAG_PROP, tags)?;
                }
            }
            Some(2) => {
                self.writer.start_triple(&self.iris.post_iri(id))?;
                self.writer
                    .add_to_triple(standard::RDF_TYPE, [Term::iri(qa::ANSWER)])?;
                if let Some(parent_id) = post.parent_id {
                    self.writer
                        .add_to_triple(qa::PARENT, [Term::iri(self.iris.post_iri(parent_id))])?;
                }
            }
            other => {
                warn!(post_id = id, post_type = ?other, "unsupported post type, skipped");
                return Ok(false);
            }
        }
        self.link_to_site()?;
        if let Some(owner_id) = post.owner_user_id {
            self.writer
                .add_to_triple(qa::OWNER, [Term::iri(self.iris.user_iri(owner_id))])?;
        }
        self.writer
            .add_to_triple(standard::DC_DESCRIPTION, [post.body.as_deref()])?;
        self.writer.add_to_triple(qa::SCORE, [post.score])?;
        self.writer
            .add_to_triple(qa::VIEW_COUNT, [post.view_count])?;
        self.writer
            .add_to_triple(qa::FAVORITE_COUNT, [post.favorite_count])?;
        self.writer
            .add_to_triple(standard::DC_DATE, [self.timestamp(&post.creation_date)])?;
        self.writer
            .add_to_triple(qa::LAST_EDITED, [self.timestamp(&post.last_edit_date)])?;
        self.writer
            .add_to_triple(qa::LAST_ACTIVITY, [self.timestamp(&post.last_activity_date)])?;
        Ok(true)
    }

    fn convert_comment(&mut self, comment: &CommentRecord) -> Result<bool> {
        let Some(id) = comment.id else {
            warn!("comment record without Id, skipped");
            return Ok(false);
        };
        self.writer.start_triple(&self.iris.comment_iri(id))?;
        self.writer
            .add_to_triple(standard::RDF_TYPE, [Term::iri(qa::COMMENT)])?;
        self.link_to_site()?;
        if let Some(post_id) = comment.post_id {
            self.writer
                .add_to_triple(qa::PARENT, [Term::iri(self.iris.post_iri(post_id))])?;
        }
        if let Some(user_id) = comment.user_id {
            self.writer
                .add_to_triple(qa::OWNER, [Term::iri(self.iris.user_iri(user_id))])?;
        }
        self.writer
            .add_to_triple(standard::DC_DESCRIPTION, [comment.text.as_deref()])?;
        self.writer.add_to_triple(qa::SCORE, [comment.score])?;
        self.writer
            .add_to_triple(standard::DC_DATE, [self.timestamp(&comment.creation_date)])?;
        Ok(true)
    }

    /// Every entity links back to the site it came from.
    fn link_to_site(&mut self) -> Result<()> {
        self.writer
            .add_to_triple(qa::SITE_PROP, [Term::iri(self.iris.site_iri())])
    }

    fn timestamp(&self, value: &Option<String>) -> Option<DateTime<Utc>> {
        let value = value.as_deref()?;
        match parse_timestamp(value) {
            Some(ts) => Some(ts),
            None => {
                warn!(value, "unparseable timestamp, dropped");
                None
            }
        }
    }
}

/// One-shot conversion of a whole dump.
pub fn convert_dump<W: Write>(
    dump: &SiteDump,
    iris: &SiteIris,
    writer: &mut TurtleWriter<W>,
) -> Result<ConvertStats> {
    DumpConverter::new(writer, iris).convert(dump)
}
