//! Authoring checks for the static catalog table.
//!
//! Nothing at runtime depends on these holding; they catch data-entry
//! mistakes before they reach a page.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use super::models::Book;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditIssue {
    #[error("slug is used by more than one book")]
    DuplicateSlug,
    #[error("page count must be positive")]
    NoPages,
    #[error("{copies} copies on hand exceeds {total_copies} total")]
    CopiesExceedTotal { copies: u32, total_copies: u32 },
    #[error("{copies} copies on hand but available is {available}")]
    AvailabilityMismatch { copies: u32, available: bool },
    #[error("available book carries due date {due_date}")]
    DueDateOnAvailable { due_date: &'static str },
    #[error("similar slug '{slug}' matches no book")]
    DanglingSimilar { slug: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditFinding {
    pub slug: &'static str,
    pub issue: AuditIssue,
}

/// Check every record against the authoring conventions, in table order.
pub fn audit(books: &[Book]) -> Vec<AuditFinding> {
    let known: HashSet<&str> = books.iter().map(|book| book.slug).collect();
    let mut seen = HashSet::new();
    let mut findings = Vec::new();

    for book in books {
        let mut report = |issue| {
            findings.push(AuditFinding {
                slug: book.slug,
                issue,
            })
        };

        if !seen.insert(book.slug) {
            report(AuditIssue::DuplicateSlug);
        }
        if book.pages == 0 {
            report(AuditIssue::NoPages);
        }
        if book.copies > book.total_copies {
            report(AuditIssue::CopiesExceedTotal {
                copies: book.copies,
                total_copies: book.total_copies,
            });
        }
        if (book.copies == 0) == book.available {
            report(AuditIssue::AvailabilityMismatch {
                copies: book.copies,
                available: book.available,
            });
        }
        if let (true, Some(due_date)) = (book.available, book.due_date) {
            report(AuditIssue::DueDateOnAvailable { due_date });
        }
        for slug in book.similar_slugs {
            if !known.contains(slug) {
                report(AuditIssue::DanglingSimilar { slug });
            }
        }
    }

    tracing::debug!(
        books = books.len(),
        findings = findings.len(),
        "catalog audit finished"
    );
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::data::BOOKS;

    fn broken() -> Book {
        let mut book = BOOKS[0].clone();
        book.slug = "broken";
        book.pages = 0;
        book.copies = 7;
        book.total_copies = 5;
        book.available = false;
        book.similar_slugs = &["nowhere"];
        book
    }

    #[test]
    fn shipped_catalog_is_clean() {
        assert!(audit(BOOKS).is_empty(), "{:?}", audit(BOOKS));
    }

    #[test]
    fn every_rule_reports() {
        let issues: Vec<_> = audit(&[broken()]).into_iter().map(|f| f.issue).collect();
        assert_eq!(
            issues,
            vec![
                AuditIssue::NoPages,
                AuditIssue::CopiesExceedTotal {
                    copies: 7,
                    total_copies: 5
                },
                AuditIssue::AvailabilityMismatch {
                    copies: 7,
                    available: false
                },
                AuditIssue::DanglingSimilar { slug: "nowhere" },
            ]
        );
    }

    #[test]
    fn duplicates_and_stray_due_dates_are_flagged() {
        let mut gatsby = BOOKS[0].clone();
        gatsby.due_date = Some("2026-05-01");
        let findings = audit(&[BOOKS[0].clone(), gatsby]);

        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.slug == "the-great-gatsby"));
        assert_eq!(findings[0].issue, AuditIssue::DuplicateSlug);
        assert_eq!(
            findings[1].issue,
            AuditIssue::DueDateOnAvailable {
                due_date: "2026-05-01"
            }
        );
    }
}
