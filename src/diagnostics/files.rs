use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash, Hasher, RandomState},
};

/// Identity of an interned source file name.
///
/// Ids are created by the `FileTable` and are only meaningful within the
/// table that produced them. They are cheap to copy and compare, which is
/// what lets every `SourceLocation` carry one without owning path storage.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FileId(u32);

impl FileId {
    #[inline]
    pub(crate) fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index, primarily for debugging or serialization.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Interning table for source file names.
///
/// One table lives for the whole compilation run; the lexer interns each
/// file name once and every diagnostic location borrows the resulting
/// `FileId`. Identical path text always yields the identical id. All path
/// text is stored in a single contiguous buffer owned by the table.
///
/// # Example
///
/// ```
/// use mica::diagnostics::FileTable;
///
/// let mut files = FileTable::new();
/// let a = files.intern("app.mi");
/// let b = files.intern("app.mi");
/// let c = files.intern("lib.mi");
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_eq!(files.resolve(a), "app.mi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileTable {
    hasher: RandomState,
    buckets: HashMap<u64, Vec<FileId>>,
    ranges: Vec<(u32, u32)>,
    storage: String,
}

impl FileTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a file name and returns its id.
    ///
    /// If the same path text was interned before, the existing id is
    /// returned.
    ///
    /// # Panics
    ///
    /// Panics if the number of distinct file names exceeds `u32::MAX`, or
    /// if the backing storage outgrows `u32::MAX` bytes. A compilation
    /// that large has gone wrong well before this point.
    pub fn intern(&mut self, path: &str) -> FileId {
        let hash = self.hash_path(path);
        if let Some(candidates) = self.buckets.get(&hash) {
            for candidate in candidates {
                if self.resolve(*candidate) == path {
                    return *candidate;
                }
            }
        }

        let index = self.ranges.len();
        assert!(
            index <= u32::MAX as usize,
            "file table overflow: more than {} distinct file names",
            u32::MAX
        );
        let id = FileId::new(index as u32);

        let start = self.storage.len();
        self.storage.push_str(path);
        let end = self.storage.len();
        assert!(end <= u32::MAX as usize, "file table storage overflow");

        self.ranges.push((start as u32, end as u32));
        self.buckets.entry(hash).or_default().push(id);
        id
    }

    /// Resolves an id back to its path text.
    ///
    /// # Panics
    ///
    /// Panics if the id was not created by this table. That is a
    /// programming error, never a reportable condition.
    #[inline]
    pub fn resolve(&self, id: FileId) -> &str {
        self.try_resolve(id)
            .unwrap_or_else(|| panic!("invalid file id: {:?}", id))
    }

    /// Attempts to resolve an id, returning `None` for ids this table did
    /// not create.
    pub fn try_resolve(&self, id: FileId) -> Option<&str> {
        let (start, end) = *self.ranges.get(id.as_u32() as usize)?;
        self.storage.get(start as usize..end as usize)
    }

    /// Number of distinct file names interned so far.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    fn hash_path(&self, path: &str) -> u64 {
        let mut h = self.hasher.build_hasher();
        path.hash(&mut h);
        h.finish()
    }
}
