//! In-memory entity store for authors and blog posts
//!
//! Both collections are append-only. Records are never removed, only flagged
//! as deleted, so a record's stored `id` always equals its index and a
//! 1-based position `p` is valid exactly when `1 <= p <= len`.

use crate::model::{Author, Blog, BlogPatch, BlogRequest, NewAuthor};
use crate::seed;

/// Error type for store operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Author not found: {0}")]
    AuthorNotFound(i64),

    #[error("Blog not found: {0}")]
    BlogNotFound(i64),
}

/// Convert a 1-based position into an index of a collection of `len` items
fn slot(position: i64, len: usize) -> Option<usize> {
    if position < 1 || position > len as i64 {
        return None;
    }
    Some((position - 1) as usize)
}

#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    authors: Vec<Author>,
    blogs: Vec<Blog>,
}

impl EntityStore {
    /// Store with the fixed seed dataset
    pub fn seeded() -> Self {
        let authors = seed::authors();
        let blogs = seed::blogs(&authors);
        Self::with_data(authors, blogs)
    }

    /// Store holding exactly the given records
    pub fn with_data(authors: Vec<Author>, blogs: Vec<Blog>) -> Self {
        Self { authors, blogs }
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn blog_count(&self) -> usize {
        self.blogs.len()
    }

    /// Every stored author, soft-deleted ones included
    pub fn all_authors(&self) -> &[Author] {
        &self.authors
    }

    /// Every stored blog, soft-deleted ones included
    pub fn all_blogs(&self) -> &[Blog] {
        &self.blogs
    }

    fn author_at(&self, position: i64) -> Result<&Author, StoreError> {
        slot(position, self.authors.len())
            .and_then(|index| self.authors.get(index))
            .ok_or(StoreError::AuthorNotFound(position))
    }

    fn author_at_mut(&mut self, position: i64) -> Result<&mut Author, StoreError> {
        slot(position, self.authors.len())
            .and_then(|index| self.authors.get_mut(index))
            .ok_or(StoreError::AuthorNotFound(position))
    }

    fn blog_at_mut(&mut self, position: i64) -> Result<&mut Blog, StoreError> {
        slot(position, self.blogs.len())
            .and_then(|index| self.blogs.get_mut(index))
            .ok_or(StoreError::BlogNotFound(position))
    }

    /// Authors not flagged as deleted, in storage order
    pub fn list_authors(&self) -> Vec<Author> {
        self.authors.iter().filter(|a| !a.deleted).cloned().collect()
    }

    /// Append a new author; its id is the author count before the append
    pub fn create_author(&mut self, new_author: NewAuthor) -> Author {
        let author = Author {
            id: self.authors.len() as i64,
            name: new_author.name,
            email: new_author.email,
            deleted: false,
        };
        self.authors.push(author.clone());
        author
    }

    /// Flag the author at `position` as deleted
    ///
    /// Blogs embedding this author keep their snapshot and stay visible.
    pub fn delete_author(&mut self, position: i64) -> Result<Author, StoreError> {
        let author = self.author_at_mut(position)?;
        author.deleted = true;
        Ok(author.clone())
    }

    /// Live blogs whose embedded author id equals `author_id`
    ///
    /// `author_id` must also be a valid author position.
    pub fn list_blogs_by_author(&self, author_id: i64) -> Result<Vec<Blog>, StoreError> {
        self.author_at(author_id)?;
        Ok(self
            .blogs
            .iter()
            .filter(|b| b.author.id == author_id && !b.deleted)
            .cloned()
            .collect())
    }

    /// Append a blog embedding a snapshot of the author at `request.author_id`
    pub fn create_blog(&mut self, request: BlogRequest) -> Result<Blog, StoreError> {
        let author = self.author_at(request.author_id)?.clone();
        let blog = Blog {
            id: self.blogs.len() as i64,
            title: request.title,
            text: request.text,
            summary: request.summary,
            author,
            likes: 0,
            dislikes: 0,
            deleted: false,
        };
        self.blogs.push(blog.clone());
        Ok(blog)
    }

    /// Overwrite the blog at `request.id` with the request contents
    ///
    /// Likes and dislikes are set to the supplied values. Both lookups happen
    /// before any write, so a failed replace leaves the blog untouched.
    pub fn replace_blog(&mut self, request: BlogRequest) -> Result<Blog, StoreError> {
        // The range check admits len + 1, which has no record behind it.
        if request.id < 1 || request.id > self.blogs.len() as i64 + 1 {
            return Err(StoreError::BlogNotFound(request.id));
        }
        let index =
            slot(request.id, self.blogs.len()).ok_or(StoreError::BlogNotFound(request.id))?;
        let author = self.author_at(request.author_id)?.clone();

        let blog = &mut self.blogs[index];
        blog.title = request.title;
        blog.text = request.text;
        blog.summary = request.summary;
        blog.author = author;
        blog.likes = request.likes;
        blog.dislikes = request.dislikes;
        Ok(blog.clone())
    }

    /// Overwrite the title, text and summary fields present in `patch`
    pub fn patch_blog(&mut self, position: i64, patch: BlogPatch) -> Result<Blog, StoreError> {
        let blog = self.blog_at_mut(position)?;
        blog.apply_patch(patch);
        Ok(blog.clone())
    }

    /// Add one like; the counter wraps around at `i64::MAX`
    pub fn like_blog(&mut self, position: i64) -> Result<Blog, StoreError> {
        let blog = self.blog_at_mut(position)?;
        blog.likes = blog.likes.wrapping_add(1);
        Ok(blog.clone())
    }

    /// Add one dislike; the counter wraps around at `i64::MAX`
    pub fn dislike_blog(&mut self, position: i64) -> Result<Blog, StoreError> {
        let blog = self.blog_at_mut(position)?;
        blog.dislikes = blog.dislikes.wrapping_add(1);
        Ok(blog.clone())
    }

    /// Flag the blog at `position` as deleted
    pub fn delete_blog(&mut self, position: i64) -> Result<Blog, StoreError> {
        let blog = self.blog_at_mut(position)?;
        blog.deleted = true;
        Ok(blog.clone())
    }
}
