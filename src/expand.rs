//! Cartesian expansion of discretized ranges into labeled combinations.
//!
//! Enumeration order is plain nested-loop order: axis 0 is the outer loop,
//! the last axis varies fastest.  `expand` walks it recursively,
//! `Combinations` walks it with a mixed-radix counter.

use std::collections::btree_map::{self, BTreeMap};
use std::convert::Infallible;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::label::format_combination;

// -----------------------------------------------------------------------------
// Result set
// -----------------------------------------------------------------------------

/// Mapping label -> value string, ordered by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries:     BTreeMap<String, String>,
    overwritten: usize,
}

impl ResultSet {
    pub fn new() -> Self { Self::default() }

    /// Insert an entry, returning the value it replaced (a label collision).
    pub fn insert(&mut self, label: String, value: String) -> Option<String> {
        let old = self.entries.insert(label, value);
        if old.is_some() { self.overwritten += 1; }
        old
    }

    pub fn get(&self, label: &str) -> Option<&str> { self.entries.get(label).map(String::as_str) }
    pub fn len(&self)      -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool  { self.entries.is_empty() }

    /// How many inserts replaced an existing entry.
    pub fn overwritten(&self) -> usize { self.overwritten }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> { self.entries.iter() }

    pub fn into_inner(self) -> BTreeMap<String, String> { self.entries }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;
    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

// -----------------------------------------------------------------------------
// Options
// -----------------------------------------------------------------------------

/// What to do when two combinations format to the same label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Later combination replaces the earlier one.
    #[default]
    Overwrite,
    /// Fail with `Error::LabelCollision`.
    Reject,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandOptions {
    pub collisions: CollisionPolicy,
    /// Split the work over the first axis with rayon.
    pub parallel:   bool,
}

// -----------------------------------------------------------------------------
// Expansion
// -----------------------------------------------------------------------------

/// Number of combinations before collisions (saturating).
pub fn combination_count(seqs: &[Vec<f64>]) -> usize {
    seqs.iter().fold(1usize, |acc, s| acc.saturating_mul(s.len()))
}

/// Sequential expansion, last write wins on label collisions.
pub fn expand(seqs: &[Vec<f64>]) -> ResultSet {
    let out = overwrite_from(seqs, &mut vec![0.0; seqs.len()], 0);
    report_overwrites(&out);
    out
}

/// Expansion with an explicit collision policy and optional parallelism.
pub fn expand_with(seqs: &[Vec<f64>], opts: &ExpandOptions) -> Result<ResultSet> {
    debug!(
        axes = seqs.len(),
        combinations = combination_count(seqs),
        parallel = opts.parallel,
        "expanding"
    );

    let parallel = opts.parallel && !seqs.is_empty();
    let out = match (opts.collisions, parallel) {
        (CollisionPolicy::Overwrite, false) => overwrite_from(seqs, &mut vec![0.0; seqs.len()], 0),
        (CollisionPolicy::Reject, false)    => reject_from(seqs, &mut vec![0.0; seqs.len()], 0)?.out,
        (CollisionPolicy::Overwrite, true)  => overwrite_parallel(seqs),
        (CollisionPolicy::Reject, true)     => reject_parallel(seqs)?,
    };
    report_overwrites(&out);
    Ok(out)
}

fn report_overwrites(out: &ResultSet) {
    if out.overwritten() > 0 {
        warn!(overwritten = out.overwritten(), "combinations with identical labels were overwritten");
    }
}

/// Visit every completion of `current[k..]` in nested-loop order.
fn descend<E, F>(
    seqs:    &[Vec<f64>],
    current: &mut [f64],
    k:       usize,
    visit:   &mut F,
) -> std::result::Result<(), E>
where
    F: FnMut(&[f64]) -> std::result::Result<(), E>,
{
    if k == seqs.len() {
        return visit(&*current);
    }
    for &v in &seqs[k] {
        current[k] = v;
        descend(seqs, current, k + 1, visit)?;
    }
    Ok(())
}

fn overwrite_from(seqs: &[Vec<f64>], current: &mut [f64], k: usize) -> ResultSet {
    let mut out = ResultSet::new();
    let mut insert = |combo: &[f64]| -> std::result::Result<(), Infallible> {
        let (label, value) = format_combination(combo);
        out.insert(label, value);
        Ok(())
    };
    let visited = descend(seqs, current, k, &mut insert);
    match visited {
        Ok(())     => out,
        Err(never) => match never {},
    }
}

/// Entries plus the raw combination behind each label, so a collision can
/// name the inputs that clashed rather than their (identical) text.
#[derive(Default)]
struct Strict {
    out:     ResultSet,
    sources: BTreeMap<String, Vec<f64>>,
}

impl Strict {
    fn push(&mut self, combo: &[f64]) -> Result<()> {
        let (label, value) = format_combination(combo);
        self.admit(label, value, combo.to_vec())
    }

    fn admit(&mut self, label: String, value: String, combo: Vec<f64>) -> Result<()> {
        if let Some(first) = self.sources.get(&label) {
            return Err(Error::LabelCollision {
                first:  format!("{first:?}"),
                second: format!("{combo:?}"),
                label,
            });
        }
        self.out.insert(label.clone(), value);
        self.sources.insert(label, combo);
        Ok(())
    }
}

fn reject_from(seqs: &[Vec<f64>], current: &mut [f64], k: usize) -> Result<Strict> {
    let mut strict = Strict::default();
    descend(seqs, current, k, &mut |combo: &[f64]| strict.push(combo))?;
    Ok(strict)
}

/// Working tuple with the first axis fixed.
fn seeded(seqs: &[Vec<f64>], v0: f64) -> Vec<f64> {
    let mut current = vec![0.0; seqs.len()];
    current[0] = v0;
    current
}

/// One partial result per first-axis value, merged back in axis order so
/// the outcome (including which entry wins a collision) matches `expand`.
fn overwrite_parallel(seqs: &[Vec<f64>]) -> ResultSet {
    let parts: Vec<ResultSet> = seqs[0]
        .par_iter()
        .map(|&v0| overwrite_from(seqs, &mut seeded(seqs, v0), 1))
        .collect();

    let mut out = ResultSet::new();
    for part in parts {
        out.overwritten += part.overwritten;
        for (label, value) in part.entries {
            out.insert(label, value);
        }
    }
    out
}

fn reject_parallel(seqs: &[Vec<f64>]) -> Result<ResultSet> {
    let parts: Vec<Strict> = seqs[0]
        .par_iter()
        .map(|&v0| reject_from(seqs, &mut seeded(seqs, v0), 1))
        .collect::<Result<_>>()?;

    let mut merged = Strict::default();
    for part in parts {
        // Both maps hold exactly the same labels, in the same order.
        for ((label, value), (_, combo)) in part.out.entries.into_iter().zip(part.sources) {
            merged.admit(label, value, combo)?;
        }
    }
    Ok(merged.out)
}

// -----------------------------------------------------------------------------
// Streaming iterator
// -----------------------------------------------------------------------------

/// Every combination in nested-loop order, without building a map.
pub struct Combinations<'a> {
    seqs:      &'a [Vec<f64>],
    counters:  Vec<usize>,
    remaining: Option<usize>,
    done:      bool,
}

impl<'a> Combinations<'a> {
    pub fn new(seqs: &'a [Vec<f64>]) -> Self {
        let remaining = seqs.iter().try_fold(1usize, |acc, s| acc.checked_mul(s.len()));
        Self {
            seqs,
            counters: vec![0; seqs.len()],
            remaining,
            done: seqs.iter().any(Vec::is_empty),
        }
    }

    /// Bump the last counter, carrying leftwards on overflow.
    fn advance(&mut self) {
        for k in (0..self.counters.len()).rev() {
            self.counters[k] += 1;
            if self.counters[k] < self.seqs[k].len() { return; }
            self.counters[k] = 0;
        }
        self.done = true;
    }
}

impl Iterator for Combinations<'_> {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Vec<f64>> {
        if self.done { return None; }
        let combo = self.counters.iter().zip(self.seqs).map(|(&i, s)| s[i]).collect();
        self.advance();
        if let Some(r) = self.remaining.as_mut() { *r = r.saturating_sub(1); }
        Some(combo)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.done, self.remaining) {
            (true, _)        => (0, Some(0)),
            (false, Some(r)) => (r, Some(r)),
            (false, None)    => (usize::MAX, None),
        }
    }
}
