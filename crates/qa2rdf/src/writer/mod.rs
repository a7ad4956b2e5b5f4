//! Incremental Turtle serialization.
//!
//! [`TurtleWriter`] emits Turtle text in a single forward pass: callers start
//! a subject, add predicate-object groups to it, and move on to the next
//! subject. The writer owns the punctuation decisions that make Turtle
//! context-sensitive (` ;` between predicate groups, `, ` between objects,
//! bracket placement for nested anonymous nodes, the terminating ` .` of a
//! subject block) so converters never backtrack or buffer the graph.
//!
//! Anonymous subjects are the one place the writer buffers: a `[ ... ]`
//! subject block is held in memory until its bracket closes, because its
//! punctuation cannot be decided before the block is complete.

mod error;
mod term;

pub use error::{Result, WriterError};
pub use term::{escape_literal, format_decimal, format_double, format_timestamp};
pub use term::{BlankNode, IntoObject, Literal, Term};

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::namespaces::Namespaces;
use crate::model::vocab;

/// Allocates writer-instance ids so blank nodes can be tied to their creator.
static NEXT_WRITER_ID: AtomicU64 = AtomicU64::new(0);

/// Final statistics returned by [`TurtleWriter::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterStats {
    pub triples: u64,
    pub bytes: u64,
}

/// One open anonymous object node.
#[derive(Debug)]
struct AnonFrame {
    /// No statement has been written inside this bracket yet.
    empty: bool,
}

/// Subject state of the writer.
#[derive(Debug)]
enum Subject {
    /// No subject chosen and no block awaiting its terminator.
    Idle,
    /// A subject is buffered; nothing has been flushed for it yet.
    Pending(Pending),
    /// The current block is on the sink up to (not including) its ` .`.
    Open,
}

#[derive(Debug)]
struct Pending {
    text: String,
    /// `Some` while the subject is an anonymous node. The whole block
    /// buffers into `text` until the node's bracket closes.
    anon: Option<AnonSubject>,
    /// Statements buffered in `text`, credited to the counter on flush.
    staged: u64,
}

#[derive(Debug)]
struct AnonSubject {
    open: bool,
    empty: bool,
}

/// A sequential Turtle writer bound to one output sink and one namespace
/// table for the lifetime of one document.
pub struct TurtleWriter<W: Write> {
    dest: W,
    namespaces: Namespaces,
    id: u64,
    next_blank_id: u64,
    subject: Subject,
    frames: Vec<AnonFrame>,
    triples: u64,
    bytes: u64,
    finished: bool,
}

impl<W: Write> TurtleWriter<W> {
    /// Creates a writer and declares every prefix in `namespaces` up front,
    /// in table order. All prefixes are declared because the writer cannot
    /// know in advance which ones the caller will use.
    pub fn new(dest: W, namespaces: Namespaces) -> Result<Self> {
        let mut writer = Self {
            dest,
            namespaces,
            id: NEXT_WRITER_ID.fetch_add(1, Ordering::Relaxed),
            next_blank_id: 0,
            subject: Subject::Idle,
            frames: Vec::new(),
            triples: 0,
            bytes: 0,
            finished: false,
        };
        let mut header = String::new();
        for (prefix, namespace) in writer.namespaces.iter() {
            header.push_str(&format!("@prefix {prefix}: <{namespace}> .\n"));
        }
        writer.emit(&header)?;
        Ok(writer)
    }

    /// Allocates a reusable blank node with a writer-unique `_:bN` name.
    pub fn create_blank_node(&mut self) -> BlankNode {
        let id = self.next_blank_id;
        self.next_blank_id += 1;
        BlankNode { owner: self.id, id }
    }

    /// Starts a new triple block with an IRI subject, concluding the
    /// previous block first.
    pub fn start_triple(&mut self, subject: &str) -> Result<()> {
        self.conclude_block()?;
        self.subject = Subject::Pending(Pending {
            text: format!("\n{}", self.namespaces.compact(subject)),
            anon: None,
            staged: 0,
        });
        Ok(())
    }

    /// Starts a new triple block with a blank node subject.
    pub fn start_blank_triple(&mut self, subject: &BlankNode) -> Result<()> {
        self.check_owner(subject)?;
        self.conclude_block()?;
        self.subject = Subject::Pending(Pending {
            text: format!("\n{}", subject.turtle_repr()),
            anon: None,
            staged: 0,
        });
        Ok(())
    }

    /// Starts a new triple block whose subject is an anonymous node. Must be
    /// paired with exactly one [`finish_anonymous_node`] call.
    ///
    /// [`finish_anonymous_node`]: TurtleWriter::finish_anonymous_node
    pub fn start_anonymous_triple(&mut self) -> Result<()> {
        self.conclude_block()?;
        self.subject = Subject::Pending(Pending {
            text: "\n[".to_string(),
            anon: Some(AnonSubject {
                open: true,
                empty: true,
            }),
            staged: 0,
        });
        Ok(())
    }

    /// Adds one predicate with zero or more objects to the current subject.
    ///
    /// `None` objects are skipped; if nothing remains the call is a no-op and
    /// no predicate is emitted. Multiple objects are rendered as a
    /// comma-separated object list.
    pub fn add_to_triple<I>(&mut self, predicate: &str, objects: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: IntoObject,
    {
        let terms: Vec<Term> = objects
            .into_iter()
            .filter_map(IntoObject::into_object)
            .collect();
        self.add_raw(predicate, false, Some(terms))
    }

    /// Adds one predicate whose objects form an ordered RDF collection
    /// `( o1 o2 … )`. Unlike [`add_to_triple`], an empty collection still
    /// emits the predicate, as `( )` is a valid (empty-list) object.
    ///
    /// [`add_to_triple`]: TurtleWriter::add_to_triple
    pub fn add_collection_to_triple<I>(&mut self, predicate: &str, objects: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: IntoObject,
    {
        let terms: Vec<Term> = objects
            .into_iter()
            .filter_map(IntoObject::into_object)
            .collect();
        self.add_raw(predicate, true, Some(terms))
    }

    /// Adds one predicate whose object is a nested anonymous node. Must be
    /// paired with exactly one [`finish_anonymous_node`] call.
    ///
    /// [`finish_anonymous_node`]: TurtleWriter::finish_anonymous_node
    pub fn add_anonymous_to_triple(&mut self, predicate: &str) -> Result<()> {
        self.add_raw(predicate, false, None)
    }

    /// Closes the innermost open anonymous node, whether it is an object or
    /// the subject itself. A no-op when nothing is open, so cleanup paths
    /// can call it unconditionally.
    pub fn finish_anonymous_node(&mut self) -> Result<()> {
        // An open anonymous subject buffers its brackets.
        if let Subject::Pending(pending) = &mut self.subject {
            if let Some(anon) = &mut pending.anon {
                if anon.open {
                    if let Some(frame) = self.frames.pop() {
                        if frame.empty {
                            pending.text.push(']');
                        } else {
                            pending.text.push('\n');
                            pending.text.push_str(&"  ".repeat(self.frames.len() + 1));
                            pending.text.push(']');
                        }
                    } else {
                        if anon.empty {
                            pending.text.push(']');
                        } else {
                            pending.text.push_str("\n]");
                        }
                        anon.open = false;
                    }
                    return Ok(());
                }
            }
        }

        if let Some(frame) = self.frames.pop() {
            if frame.empty {
                self.emit("]")?;
            } else {
                let text = format!("\n{}]", "  ".repeat(self.frames.len() + 1));
                self.emit(&text)?;
            }
        }
        Ok(())
    }

    /// Number of statements emitted (or staged) so far. Monotonic.
    pub fn triple_count(&self) -> u64 {
        self.triples
    }

    /// Current size of the output in bytes. Flushes the sink first so the
    /// number reflects what has actually been written.
    pub fn byte_count(&mut self) -> Result<u64> {
        self.dest.flush()?;
        Ok(self.bytes)
    }

    /// Concludes the document, flushes the sink, and returns the final
    /// statistics. Consuming `self` makes reuse of a closed writer
    /// impossible.
    pub fn finish(mut self) -> Result<WriterStats> {
        self.conclude_block()?;
        self.dest.flush()?;
        self.finished = true;
        Ok(WriterStats {
            triples: self.triples,
            bytes: self.bytes,
        })
    }

    /// All sink writes go through here so the byte counter stays exact.
    fn emit(&mut self, text: &str) -> Result<()> {
        self.dest.write_all(text.as_bytes())?;
        self.bytes += text.len() as u64;
        Ok(())
    }

    fn check_owner(&self, node: &BlankNode) -> Result<()> {
        if node.owner != self.id {
            return Err(WriterError::ForeignBlankNode { id: node.id });
        }
        Ok(())
    }

    /// True while any anonymous node (object frame or subject) is open.
    fn frames_open(&self) -> bool {
        if !self.frames.is_empty() {
            return true;
        }
        matches!(&self.subject, Subject::Pending(p) if p.anon.as_ref().is_some_and(|a| a.open))
    }

    /// Terminates whatever block is in progress so a new subject can start
    /// or the document can end.
    ///
    /// Still-open anonymous nodes are closed innermost-first. A pending
    /// subject that never received a statement is dropped, as a bare subject
    /// is not expressible in Turtle; a completed anonymous-subject block with
    /// content is flushed and terminated here.
    fn conclude_block(&mut self) -> Result<()> {
        while self.frames_open() {
            self.finish_anonymous_node()?;
        }
        match std::mem::replace(&mut self.subject, Subject::Idle) {
            Subject::Idle => {}
            Subject::Open => self.emit(" .\n")?,
            Subject::Pending(pending) => {
                if pending.anon.is_some() && pending.staged > 0 {
                    self.emit(&pending.text)?;
                    self.emit(" .\n")?;
                    self.triples += pending.staged;
                }
            }
        }
        Ok(())
    }

    fn format_predicate(&self, predicate: &str) -> String {
        if predicate == vocab::standard::RDF_TYPE {
            "a".to_string()
        } else {
            self.namespaces.compact(predicate)
        }
    }

    fn format_term(&self, term: &Term) -> Result<String> {
        Ok(match term {
            Term::Iri(iri) => self.namespaces.compact(iri),
            Term::Blank(node) => {
                self.check_owner(node)?;
                node.turtle_repr()
            }
            Term::Literal(literal) => self.format_literal(literal),
        })
    }

    fn format_literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::String(s) => format!("\"{}\"", escape_literal(s)),
            Literal::Integer(v) => v.to_string(),
            Literal::Decimal(v) => format_decimal(*v),
            Literal::Double(v) => format_double(*v),
            Literal::Boolean(v) => if *v { "true" } else { "false" }.to_string(),
            Literal::DateTime(v) => format!(
                "\"{}\"^^{}",
                format_timestamp(v),
                self.namespaces.compact(vocab::standard::XSD_DATE_TIME)
            ),
        }
    }

    /// Emits the separator in front of a statement, flushing the pending
    /// subject when this is its first statement. Returns `true` when the
    /// statement must be buffered into an open anonymous subject instead of
    /// written to the sink.
    fn prepare_statement(&mut self) -> Result<bool> {
        let flush_pending = match &self.subject {
            Subject::Idle => return Err(WriterError::NoActiveSubject),
            Subject::Open => false,
            Subject::Pending(p) => !p.anon.as_ref().is_some_and(|a| a.open),
        };

        if flush_pending {
            let pending = match std::mem::replace(&mut self.subject, Subject::Open) {
                Subject::Pending(p) => p,
                _ => unreachable!("flush_pending implies a pending subject"),
            };
            self.emit(&pending.text)?;
            self.triples += pending.staged;
            return Ok(false);
        }

        match &mut self.subject {
            Subject::Open => {
                // First statement inside a fresh bracket takes no separator.
                if let Some(frame) = self.frames.last_mut() {
                    if frame.empty {
                        frame.empty = false;
                        return Ok(false);
                    }
                }
                self.emit(" ;")?;
                Ok(false)
            }
            Subject::Pending(pending) => {
                if let Some(frame) = self.frames.last_mut() {
                    if frame.empty {
                        frame.empty = false;
                    } else {
                        pending.text.push_str(" ;");
                    }
                } else {
                    let anon = pending
                        .anon
                        .as_mut()
                        .expect("buffering implies an open anonymous subject");
                    if anon.empty {
                        anon.empty = false;
                    } else {
                        pending.text.push_str(" ;");
                    }
                }
                Ok(true)
            }
            Subject::Idle => unreachable!("handled above"),
        }
    }

    /// Shared body of the three add operations. `objects` of `None` opens an
    /// anonymous object node.
    fn add_raw(
        &mut self,
        predicate: &str,
        as_collection: bool,
        objects: Option<Vec<Term>>,
    ) -> Result<()> {
        // Format (and ownership-check) every object before any output
        // happens, so an invalid call leaves the document untouched.
        let rendered = match &objects {
            None => None,
            Some(terms) => {
                let mut texts = Vec::with_capacity(terms.len());
                for term in terms {
                    texts.push(self.format_term(term)?);
                }
                Some(texts)
            }
        };
        if let Some(texts) = &rendered {
            if texts.is_empty() && !as_collection {
                return Ok(());
            }
        }

        let buffering = self.prepare_statement()?;

        let indent = "  ".repeat(self.frames.len() + 1);
        let pred = self.format_predicate(predicate);
        let mut text = String::new();
        let mut counted = 0u64;
        match rendered {
            None => {
                text.push_str(&format!("\n{indent}{pred} ["));
                self.frames.push(AnonFrame { empty: true });
                counted += 1;
            }
            Some(texts) if as_collection => {
                text.push_str(&format!("\n{indent}{pred} ("));
                for object in &texts {
                    text.push(' ');
                    text.push_str(object);
                    counted += 2;
                }
                if !texts.is_empty() {
                    text.push(' ');
                }
                text.push(')');
                counted += 1;
            }
            Some(texts) => {
                for (i, object) in texts.iter().enumerate() {
                    if i == 0 {
                        text.push_str(&format!("\n{indent}{pred} {object}"));
                    } else {
                        text.push_str(&format!(", {object}"));
                    }
                    counted += 1;
                }
            }
        }

        if buffering {
            if let Subject::Pending(pending) = &mut self.subject {
                pending.text.push_str(&text);
                pending.staged += counted;
            }
        } else {
            self.emit(&text)?;
            self.triples += counted;
        }
        Ok(())
    }
}

impl<W: Write> Drop for TurtleWriter<W> {
    /// Best-effort conclusion so an abandoned writer still terminates its
    /// output. Errors here have nowhere to go and are dropped.
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.conclude_block();
            let _ = self.dest.flush();
        }
    }
}
