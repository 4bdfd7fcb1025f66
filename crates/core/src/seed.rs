//! Initial dataset loaded into every new store
//!
//! Record ids match their storage index, so the seed authors are 0 through 4
//! and the seed blogs 0 through 3.

use crate::model::{Author, Blog};

fn author(id: i64, name: &str, email: &str) -> Author {
    Author {
        id,
        name: name.to_string(),
        email: email.to_string(),
        deleted: false,
    }
}

/// Seed authors in storage order
pub fn authors() -> Vec<Author> {
    vec![
        author(0, "Critic", "critic@demoblog.api"),
        author(1, "Philosopher", "philosopher@demoblog.api"),
        author(2, "Artist", "artist@demoblog.api"),
        author(3, "Dreamer", "dreamer@demoblog.api"),
        author(4, "Poet", "poet@demoblog.api"),
    ]
}

/// Seed blogs in storage order, each embedding a snapshot from `authors`
pub fn blogs(authors: &[Author]) -> Vec<Blog> {
    let entries: [(&str, &str, usize, i64, i64); 4] = [
        (
            "Reflections minus traumas",
            "Someday, we'll complain. Not that life was difficult and we were victims, but that life was beautiful, and we didn't pay attention",
            1,
            10,
            2,
        ),
        (
            "Alarmingly mid",
            "I see a sea of people, drowning in mediocrity because they've accepted 'good enough' to be their standard. Oh my fellow human how I yearn to let you know! You were meant to be nothing short of excellent",
            0,
            7,
            0,
        ),
        (
            "Far away",
            "Under an open sky I lay, \nthinking of you - dare I say, \nbillions of heavenly jewels in space, \nand yet - not a single one more beautiful than your face, \nwith distances so vast they're measured in light years, \nthey pale in comparison to our separation I fear",
            4,
            13,
            1,
        ),
        (
            "Colors",
            "Can you imagine? A monotone world? A world without color. A world where you've seen everything? There is no new, just the same. Everyday is every other day, with different shades of grey? Bring some color into your life my friend, bring some color into your life",
            2,
            10,
            2,
        ),
    ];

    entries
        .iter()
        .filter_map(|(title, text, author_index, likes, dislikes)| {
            let author = authors.get(*author_index)?.clone();
            Some((title, text, author, *likes, *dislikes))
        })
        .enumerate()
        .map(|(index, (title, text, author, likes, dislikes))| Blog {
            id: index as i64,
            title: title.to_string(),
            text: text.to_string(),
            summary: String::new(),
            author,
            likes,
            dislikes,
            deleted: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_match_storage_index() {
        let authors = authors();
        let blogs = blogs(&authors);

        assert_eq!(authors.len(), 5);
        assert_eq!(blogs.len(), 4);
        for (index, author) in authors.iter().enumerate() {
            assert_eq!(author.id, index as i64);
        }
        for (index, blog) in blogs.iter().enumerate() {
            assert_eq!(blog.id, index as i64);
        }
    }

    #[test]
    fn test_seed_blog_authors() {
        let authors = authors();
        let blogs = blogs(&authors);

        let names: Vec<&str> = blogs.iter().map(|b| b.author.name.as_str()).collect();
        assert_eq!(names, vec!["Philosopher", "Critic", "Poet", "Artist"]);
    }

    #[test]
    fn test_seed_nothing_deleted() {
        let authors = authors();
        let blogs = blogs(&authors);

        assert!(authors.iter().all(|a| !a.deleted));
        assert!(blogs.iter().all(|b| !b.deleted && b.summary.is_empty()));
    }

    #[test]
    fn test_seed_blogs_skip_missing_authors() {
        let authors = authors();
        let blogs = blogs(&authors[..1]);

        assert_eq!(blogs.len(), 1);
        assert_eq!(blogs[0].id, 0);
        assert_eq!(blogs[0].title, "Alarmingly mid");
    }
}
