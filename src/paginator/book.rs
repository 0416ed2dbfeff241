use std::collections::BTreeSet;
use std::ops::{Add, BitAnd};

use super::error::{PaginatorError, Result};
use super::navigation::{Action, Controls, Navigation};
use super::page::Page;

/// How a [`Book`] treats the pages it is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookOptions {
    /// Only this user may press the book's buttons.
    pub owner: Option<u64>,
    /// Give pages without a slot the smallest free one instead of rejecting them.
    pub autoindex: bool,
    /// Renumber slots to `0..n` after every change.
    pub contiguous: bool,
}

impl Default for BookOptions {
    fn default() -> Self {
        Self {
            owner: None,
            autoindex: true,
            contiguous: false,
        }
    }
}

#[allow(dead_code)]
impl BookOptions {
    pub fn owner(mut self, owner: u64) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn autoindex(mut self, autoindex: bool) -> Self {
        self.autoindex = autoindex;
        self
    }

    pub fn contiguous(mut self, contiguous: bool) -> Self {
        self.contiguous = contiguous;
        self
    }
}

/// An ordered, navigable collection of pages.
///
/// Pages are always sorted by slot and no two pages share a slot. Every
/// fallible operation checks its input before touching the book, so a failed
/// call leaves the book as it was.
#[derive(Debug, Clone)]
pub struct Book {
    pages: Vec<Page>,
    navigation: Navigation,
    owner: Option<u64>,
    autoindex: bool,
    contiguous: bool,
    stopped: bool,
}

#[allow(dead_code)]
impl Book {
    pub fn new(mut pages: Vec<Page>, options: BookOptions) -> Result<Self> {
        if pages.is_empty() {
            return Err(PaginatorError::EmptyBook);
        }

        normalize(&mut pages, options.autoindex)?;
        if options.contiguous {
            renumber(&mut pages);
        }

        Ok(Self {
            navigation: Navigation::new(pages.len()),
            pages,
            owner: options.owner,
            autoindex: options.autoindex,
            contiguous: options.contiguous,
            stopped: false,
        })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn owner(&self) -> Option<u64> {
        self.owner
    }

    pub fn position(&self) -> usize {
        self.navigation.position()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The page a fresh view opens on.
    pub fn start(&self) -> &Page {
        &self.pages[0]
    }

    pub fn current_page(&self) -> &Page {
        &self.pages[self.navigation.position()]
    }

    /// Control states for the current position, `None` once the book is stopped.
    pub fn controls(&self) -> Option<Controls> {
        (!self.stopped).then(|| self.navigation.controls())
    }

    /// Checks that `user_id` may drive this book.
    pub fn authorize(&self, user_id: u64) -> Result<()> {
        match self.owner {
            Some(owner) if owner != user_id => Err(PaginatorError::NotOwner(owner)),
            _ => Ok(()),
        }
    }

    /// Performs the transition bound to a button role.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        self.ensure_running()?;
        match action {
            Action::First => self.navigation.first(),
            Action::Previous => self.navigation.previous(),
            Action::Next => self.navigation.next(),
            Action::Last => self.navigation.last(),
            Action::GoBack => self.navigation.go_back(),
            Action::Stop => self.stopped = true,
            Action::Counter | Action::EnterIndex => {}
        }
        Ok(())
    }

    /// Moves to a 0-based position.
    pub fn jump(&mut self, position: usize) -> Result<()> {
        self.ensure_running()?;
        self.navigation.jump(position)
    }

    pub fn stop(&mut self) -> Result<()> {
        self.apply(Action::Stop)
    }

    pub fn push(&mut self, page: Page) -> Result<()> {
        self.extend(vec![page])
    }

    /// Adds pages, auto-indexing the ones without a slot if this book does so.
    pub fn extend(&mut self, pages: impl IntoIterator<Item = Page>) -> Result<()> {
        self.ensure_running()?;
        let shown = self.current_page().index();
        let remembered = self.remembered_page();
        let old_len = self.pages.len();

        self.pages.extend(pages);
        if let Err(e) = normalize(&mut self.pages, self.autoindex) {
            self.pages.truncate(old_len);
            return Err(e);
        }
        self.settle(shown, remembered);
        Ok(())
    }

    /// Appends every page of `other` after the last slot of this book, keeping their order.
    pub fn merge(&mut self, other: Book) -> Result<()> {
        self.ensure_running()?;
        let shown = self.current_page().index();
        let remembered = self.remembered_page();
        let start = self.pages.last().and_then(Page::index).map_or(0, |i| i + 1);

        for (offset, mut page) in other.pages.into_iter().enumerate() {
            page.assign_index(start + offset);
            self.pages.push(page);
        }
        self.settle(shown, remembered);
        Ok(())
    }

    /// Moves the page at `position` to a new slot, keeping the reader on the page
    /// they were looking at.
    ///
    /// In a contiguous book slots are rewritten to `0..n` right after, so the
    /// call only changes where the page sits in the order.
    pub fn set_page_index(&mut self, position: usize, index: i64) -> Result<()> {
        self.ensure_running()?;
        let new_index = usize::try_from(index).map_err(|_| PaginatorError::InvalidIndex(index))?;
        let total = self.pages.len();
        if position >= total {
            return Err(PaginatorError::PositionOutOfRange { position, total });
        }
        let taken = self
            .pages
            .iter()
            .enumerate()
            .any(|(i, page)| i != position && page.index() == Some(new_index));
        if taken {
            return Err(PaginatorError::DuplicateIndex(new_index));
        }

        let slot_after_move = |at: usize, slot: Option<usize>| {
            if at == position { Some(new_index) } else { slot }
        };
        let shown = slot_after_move(self.navigation.position(), self.current_page().index());
        let remembered = self
            .navigation
            .previous_position()
            .and_then(|at| slot_after_move(at, self.pages.get(at).and_then(Page::index)));
        self.pages[position].assign_index(new_index);
        self.pages.sort_by_key(Page::index);
        self.settle(shown, remembered);
        Ok(())
    }

    /// Rewrites every slot so they run `0..n` in their current order.
    pub fn renumber(&mut self) {
        renumber(&mut self.pages);
    }

    fn ensure_running(&self) -> Result<()> {
        if self.stopped {
            return Err(PaginatorError::Stopped);
        }
        Ok(())
    }

    /// Slot of the page go-back would return to.
    fn remembered_page(&self) -> Option<usize> {
        self.navigation
            .previous_position()
            .and_then(|at| self.pages.get(at))
            .and_then(Page::index)
    }

    /// Re-finds the shown and remembered pages by slot after the pages changed.
    fn settle(&mut self, shown: Option<usize>, remembered: Option<usize>) {
        let find = |slot: usize| self.pages.iter().position(|page| page.index() == Some(slot));
        let position = shown.and_then(find).unwrap_or(0);
        let previous = remembered.and_then(find);
        if self.contiguous {
            renumber(&mut self.pages);
        }
        self.navigation.reset(position, previous, self.pages.len());
    }
}

/// `book + page` appends a page, returning the book.
impl Add<Page> for Book {
    type Output = Result<Book>;

    fn add(mut self, page: Page) -> Result<Book> {
        self.push(page)?;
        Ok(self)
    }
}

impl Add<Vec<Page>> for Book {
    type Output = Result<Book>;

    fn add(mut self, pages: Vec<Page>) -> Result<Book> {
        self.extend(pages)?;
        Ok(self)
    }
}

/// `book & book` merges the right-hand book behind the left-hand one.
impl BitAnd for Book {
    type Output = Result<Book>;

    fn bitand(mut self, other: Book) -> Result<Book> {
        self.merge(other)?;
        Ok(self)
    }
}

/// Validates slots, fills in missing ones and sorts.
///
/// Nothing is written until every page has been checked.
fn normalize(pages: &mut [Page], autoindex: bool) -> Result<()> {
    let mut used = BTreeSet::new();
    for page in pages.iter() {
        match page.index() {
            Some(index) => {
                if !used.insert(index) {
                    return Err(PaginatorError::DuplicateIndex(index));
                }
            }
            None if !autoindex => return Err(PaginatorError::MissingIndex),
            None => {}
        }
    }

    let mut candidate = 0;
    for page in pages.iter_mut().filter(|page| page.index().is_none()) {
        while used.contains(&candidate) {
            candidate += 1;
        }
        page.assign_index(candidate);
        used.insert(candidate);
    }

    pages.sort_by_key(Page::index);
    Ok(())
}

fn renumber(pages: &mut [Page]) {
    for (slot, page) in pages.iter_mut().enumerate() {
        page.assign_index(slot);
    }
}
