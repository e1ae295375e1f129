use sha2::{Digest, Sha256};

use crate::block::Block;
use crate::paginate::PaginationResult;

const FINGERPRINT_ID: &str = "galley.pagination.v1";

impl PaginationResult {
    /// Canonical SHA-256 over the page/block structure: block kinds, payload
    /// text and milli-pixel heights in document order, with explicit page
    /// boundaries. Two runs over an unchanged model produce equal
    /// fingerprints; any reflow, reorder or content edit changes it.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(FINGERPRINT_ID.as_bytes());
        hasher.update(b"\n");
        hasher.update(self.page_count.to_string().as_bytes());
        for page in &self.pages {
            hasher.update(b"\npage ");
            hasher.update(page.used.to_milli_i64().to_string().as_bytes());
            for block in &page.blocks {
                hash_block(&mut hasher, block);
            }
        }
        let digest = hasher.finalize();
        let mut out = String::with_capacity(digest.len() * 2);
        for b in digest {
            use std::fmt::Write;
            let _ = write!(&mut out, "{:02x}", b);
        }
        out
    }
}

fn hash_block(hasher: &mut Sha256, block: &Block) {
    hasher.update(b"\n");
    hasher.update(block.kind_name().as_bytes());
    hasher.update(b" ");
    hasher.update(block.height().to_milli_i64().to_string().as_bytes());
    match block {
        Block::Text(text) => {
            hasher.update(b" ");
            hasher.update(text.text.as_bytes());
        }
        Block::TableRow(row) => {
            for field in [&row.category, &row.flow, &row.description] {
                hasher.update(b" ");
                hasher.update(field.as_bytes());
            }
        }
        Block::MilestoneGroup(group) => {
            hasher.update(b" ");
            hasher.update(group.title.as_bytes());
            for line in &group.lines {
                hasher.update(b" ");
                hasher.update(line.title.as_bytes());
                hasher.update(b" ");
                hasher.update(line.days.to_string().as_bytes());
            }
        }
        Block::Signature(signature) => {
            hasher.update(b" ");
            hasher.update(signature.client_name.as_bytes());
            hasher.update(b" ");
            hasher.update(signature.agency_name.as_bytes());
        }
        Block::TableHeader(_) | Block::Filler(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::block::{Block, SectionKind, TextBlock};
    use crate::paginate::{Page, PaginationResult};
    use crate::types::Px;

    fn result_with_text(text: &str) -> PaginationResult {
        PaginationResult {
            pages: vec![Page {
                blocks: vec![Block::Text(TextBlock {
                    section: SectionKind::Intro,
                    text: text.to_string(),
                    height: Px::from_i32(40),
                })],
                used: Px::from_i32(40),
            }],
            page_count: 2,
        }
    }

    #[test]
    fn equal_structures_share_a_fingerprint() {
        assert_eq!(
            result_with_text("hello").fingerprint(),
            result_with_text("hello").fingerprint()
        );
    }

    #[test]
    fn content_edits_change_the_fingerprint() {
        assert_ne!(
            result_with_text("hello").fingerprint(),
            result_with_text("hello!").fingerprint()
        );
    }

    #[test]
    fn fingerprint_is_lowercase_hex() {
        let fp = result_with_text("hello").fingerprint();
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
