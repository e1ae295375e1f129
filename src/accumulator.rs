use crate::block::{Block, FillerBlock};
use crate::debug::DebugLogger;
use crate::error::GalleyError;
use crate::paginate::Page;
use crate::types::Px;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BreakReason {
    Capacity,
    TableSplit,
}

impl BreakReason {
    fn as_str(self) -> &'static str {
        match self {
            BreakReason::Capacity => "capacity",
            BreakReason::TableSplit => "table_split",
        }
    }
}

/// Greedy packer for one pagination run. Owns the current-height invariant:
/// a committed page never exceeds the capacity unless it holds a single
/// oversized atomic block, which is placed alone and accepted as overflow.
pub(crate) struct PageAccumulator {
    capacity: Px,
    current: Vec<Block>,
    used: Px,
    pages: Vec<Page>,
    filler_blocks: usize,
    debug: Option<DebugLogger>,
}

impl PageAccumulator {
    pub fn new(capacity: Px, debug: Option<DebugLogger>) -> Self {
        Self {
            capacity,
            current: Vec::new(),
            used: Px::ZERO,
            pages: Vec::new(),
            filler_blocks: 0,
            debug,
        }
    }

    pub fn used(&self) -> Px {
        self.used
    }

    pub fn remaining(&self) -> Px {
        (self.capacity - self.used).max(Px::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// 1-based number of the page currently being filled.
    pub fn page_number(&self) -> usize {
        self.pages.len() + 1
    }

    pub fn would_overflow(&self, height: Px) -> bool {
        !self.current.is_empty() && self.used + height > self.capacity
    }

    /// Places `block`, closing the current page first if the block does not
    /// fit. A block taller than a whole page still lands alone on its own
    /// page; visual overflow is a rendering defect, not a layout failure.
    pub fn push(&mut self, block: Block) -> Result<(), GalleyError> {
        ensure_valid_height(&block)?;
        if self.would_overflow(block.height()) {
            self.close_page(BreakReason::Capacity, block.kind_name());
        }
        self.used += block.height();
        self.current.push(block);
        Ok(())
    }

    /// Overflow-filler rule: when an upcoming atomic block plus the safety
    /// margin does not fit below the content already placed, pad the page
    /// with an inert filler sized exactly to the remaining capacity so the
    /// next push starts a fresh page. On an empty page the block already
    /// starts at the top and padding would only manufacture a blank page.
    pub fn reserve(&mut self, upcoming: Px, margin: Px) {
        if self.current.is_empty() {
            return;
        }
        if self.used + upcoming + margin <= self.capacity {
            return;
        }
        let slack = self.remaining();
        if slack <= Px::ZERO {
            return;
        }
        if let Some(debug) = &self.debug {
            debug.log_filler(self.page_number(), slack);
        }
        self.used += slack;
        self.current.push(Block::Filler(FillerBlock { height: slack }));
        self.filler_blocks += 1;
    }

    pub fn close_page(&mut self, reason: BreakReason, next_block: &str) {
        if self.current.is_empty() {
            return;
        }
        if let Some(debug) = &self.debug {
            debug.log_page_break(
                reason.as_str(),
                self.page_number(),
                self.page_number() + 1,
                next_block,
            );
        }
        let blocks = std::mem::take(&mut self.current);
        self.pages.push(Page {
            blocks,
            used: self.used,
        });
        self.used = Px::ZERO;
    }

    /// Flushes the in-progress page and returns the committed pages plus the
    /// filler count for metrics.
    pub fn finish(mut self) -> (Vec<Page>, usize) {
        if !self.current.is_empty() {
            let blocks = std::mem::take(&mut self.current);
            self.pages.push(Page {
                blocks,
                used: self.used,
            });
        }
        (self.pages, self.filler_blocks)
    }
}

fn ensure_valid_height(block: &Block) -> Result<(), GalleyError> {
    if block.height().is_negative() {
        return Err(GalleyError::InvalidBlock(format!(
            "{} block has negative height {}px",
            block.kind_name(),
            block.height().to_f32()
        )));
    }
    Ok(())
}
