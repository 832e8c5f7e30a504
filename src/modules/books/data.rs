use super::models::{Book, CatalogStats, Genre};

/// The catalog. Defined once at compile time and never mutated.
pub static BOOKS: &[Book] = &[
    Book {
        slug: "the-great-gatsby",
        title: "The Great Gatsby",
        author: "F. Scott Fitzgerald",
        genre: Genre::Fiction,
        pages: 180,
        available: true,
        due_date: None,
        copies: 3,
        total_copies: 5,
        year: 1925,
        isbn: "978-0-7432-7356-5",
        description: "A portrait of the Jazz Age in all of its decadence and excess, Gatsby captured the spirit of the author's generation and earned itself a permanent place in American mythology. Self-made, self-invented millionaire Jay Gatsby embodies some of Fitzgerald's ideals of romance, richness, and youth. Here, he pursues a distant dream embodied in a single green light across the water.",
        branch: "Main Street Branch",
        shelf: "Fiction, Row A, Shelf 3",
        similar_slugs: &["to-kill-a-mockingbird"],
    },
    Book {
        slug: "a-brief-history-of-time",
        title: "A Brief History of Time",
        author: "Stephen Hawking",
        genre: Genre::Science,
        pages: 256,
        available: false,
        due_date: Some("2026-03-15"),
        copies: 0,
        total_copies: 2,
        year: 1988,
        isbn: "978-0-553-38016-3",
        description: "Stephen Hawking attempts to explain a range of subjects in cosmology, including the Big Bang, black holes, and light cones, to the nonspecialist reader. The book explores fundamental questions about the universe: where it came from, where it is going, and how it will end.",
        branch: "Riverside Branch",
        shelf: "Science, Row B, Shelf 7",
        similar_slugs: &["cosmos", "sapiens"],
    },
    Book {
        slug: "to-kill-a-mockingbird",
        title: "To Kill a Mockingbird",
        author: "Harper Lee",
        genre: Genre::Fiction,
        pages: 281,
        available: true,
        due_date: None,
        copies: 1,
        total_copies: 4,
        year: 1960,
        isbn: "978-0-06-112008-4",
        description: "The unforgettable novel of a childhood in a sleepy Southern town and the crisis of conscience that rocked it. Through the young eyes of Scout and Jem Finch, Harper Lee explores with exuberant humour the irrationality of adult attitudes to race and class in the Deep South of the 1930s.",
        branch: "Main Street Branch",
        shelf: "Fiction, Row A, Shelf 5",
        similar_slugs: &["the-great-gatsby"],
    },
    Book {
        slug: "sapiens",
        title: "Sapiens",
        author: "Yuval Noah Harari",
        genre: Genre::History,
        pages: 443,
        available: false,
        due_date: Some("2026-04-01"),
        copies: 0,
        total_copies: 3,
        year: 2011,
        isbn: "978-0-06-231609-7",
        description: "In this bold and provocative book, Yuval Noah Harari explores the ways in which biology and history have defined us, and enhanced our understanding of what it means to be human. From examining the role of evolving humans in the ecosystem to charting the rise of empires, Sapiens integrates history and science.",
        branch: "Hillside Branch",
        shelf: "History, Row C, Shelf 2",
        similar_slugs: &["a-brief-history-of-time", "the-art-of-war"],
    },
    Book {
        slug: "the-art-of-war",
        title: "The Art of War",
        author: "Sun Tzu",
        genre: Genre::Philosophy,
        pages: 68,
        available: true,
        due_date: None,
        copies: 2,
        total_copies: 2,
        year: -500,
        isbn: "978-1-59030-227-8",
        description: "Written in the fifth century BC, The Art of War is a military treatise that has long transcended its original purpose. Its lessons on strategy, tactics, and leadership have been adopted by business leaders, politicians, and anyone facing competitive challenges. Sun Tzu offers timeless principles of conflict and negotiation.",
        branch: "Main Street Branch",
        shelf: "Philosophy, Row D, Shelf 1",
        similar_slugs: &["sapiens"],
    },
    Book {
        slug: "cosmos",
        title: "Cosmos",
        author: "Carl Sagan",
        genre: Genre::Science,
        pages: 396,
        available: true,
        due_date: None,
        copies: 4,
        total_copies: 4,
        year: 1980,
        isbn: "978-0-345-53943-4",
        description: "Cosmos traces the origins of knowledge and the scientific method, mixing science and philosophy, and speculates to the future of science. The book covers a broad range of topics, including the origin of life, the human brain, Egyptian hieroglyphics, spacecraft missions, the death of the Sun, the evolution of galaxies, and more.",
        branch: "Riverside Branch",
        shelf: "Science, Row B, Shelf 9",
        similar_slugs: &["a-brief-history-of-time"],
    },
];

pub fn find_by_slug(slug: &str) -> Option<&'static Book> {
    BOOKS.iter().find(|book| book.slug == slug)
}

/// Resolves `similar_slugs` in order; slugs with no matching book are dropped.
pub fn similar_titles(book: &Book) -> Vec<&'static Book> {
    book.similar_slugs
        .iter()
        .filter_map(|slug| find_by_slug(slug))
        .collect()
}

/// Distinct genres in order of first appearance.
pub fn genres(books: &[Book]) -> Vec<Genre> {
    let mut seen = Vec::new();
    for book in books {
        if !seen.contains(&book.genre) {
            seen.push(book.genre);
        }
    }
    seen
}

pub fn stats(books: &[Book]) -> CatalogStats {
    let available = books.iter().filter(|book| book.available).count();
    CatalogStats {
        total: books.len(),
        available,
        checked_out: books.len() - available,
        genres: genres(books).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_resolve() {
        let book = find_by_slug("cosmos").unwrap();
        assert_eq!(book.title, "Cosmos");
        assert!(find_by_slug("dune").is_none());
    }

    #[test]
    fn similar_titles_keep_declared_order() {
        let book = find_by_slug("sapiens").unwrap();
        let similar: Vec<_> = similar_titles(book).iter().map(|b| b.slug).collect();
        assert_eq!(similar, vec!["a-brief-history-of-time", "the-art-of-war"]);
    }

    #[test]
    fn dangling_similar_slugs_are_dropped() {
        let mut book = find_by_slug("cosmos").unwrap().clone();
        book.similar_slugs = &["missing", "sapiens", "cosmos"];
        let similar: Vec<_> = similar_titles(&book).iter().map(|b| b.slug).collect();
        assert_eq!(similar, vec!["sapiens", "cosmos"]);
    }

    #[test]
    fn genres_follow_first_appearance() {
        assert_eq!(
            genres(BOOKS),
            vec![
                Genre::Fiction,
                Genre::Science,
                Genre::History,
                Genre::Philosophy
            ]
        );
    }

    #[test]
    fn stats_count_the_shipped_table() {
        assert_eq!(
            stats(BOOKS),
            CatalogStats {
                total: 6,
                available: 4,
                checked_out: 2,
                genres: 4,
            }
        );
        assert_eq!(stats(&[]), CatalogStats::default());
    }
}
