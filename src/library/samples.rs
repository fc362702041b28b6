use super::{NewBook, ReadStatus};

/// Books seeded on startup when `library.sample_books` is set.
/// Covers are file names looked up in `paths.covers_dir`.
pub fn sample_books() -> Vec<NewBook> {
    vec![
        NewBook::new("The Hobbit", "J.R.R. Tolkien").year(1937).cover("the-hobbit.jpg"),
        NewBook::new("1984", "George Orwell").year(1949).cover("1984.jpg"),
        NewBook::new("To Kill a Mockingbird", "Harper Lee")
            .year(1960)
            .cover("to-kill-a-mockingbird.jpg"),
        NewBook::new("My Ex's Diary", "My Ex").year(2018),
        NewBook::new("The Great Gatsby", "F. Scott Fitzgerald")
            .year(1925)
            .status(ReadStatus::Reading)
            .cover("the-great-gatsby.jpg"),
        NewBook::new("Moby Dick", "Herman Melville")
            .year(1851)
            .status(ReadStatus::Reading)
            .cover("moby-dick.jpg"),
        NewBook::new("The Language Instinct", "Steven Pinker")
            .year(1994)
            .status(ReadStatus::Finished)
            .cover("the-language-instinct.jpg"),
        NewBook::new("Pride and Prejudice", "Jane Austen")
            .year(1813)
            .status(ReadStatus::Finished)
            .cover("pride-and-prejudice.jpg"),
    ]
}
