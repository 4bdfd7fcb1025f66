use super::SharedStore;
use crate::prelude::*;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use blogapi_core::model::{Author, Blog, BlogPatch, BlogRequest, NewAuthor};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AuthorQuery {
    #[serde(rename = "authorId")]
    pub author_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct BlogIdQuery {
    #[serde(rename = "blogId")]
    pub blog_id: i64,
}

// --- authors ---

pub async fn list_authors(State(store): State<SharedStore>) -> Json<Vec<Author>> {
    let authors = store.read().await.list_authors();
    log::debug!("listing {} authors", authors.len());
    Json(authors)
}

pub async fn create_author(
    State(store): State<SharedStore>,
    body: Result<Json<NewAuthor>, JsonRejection>,
) -> Result<(StatusCode, Json<Author>), Error> {
    let Json(new_author) = body?;
    let author = store.write().await.create_author(new_author);
    log::debug!("created author {}", author.id);
    Ok((StatusCode::CREATED, Json(author)))
}

pub async fn delete_author(
    State(store): State<SharedStore>,
    author_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Author>, Error> {
    let Path(author_id) = author_id?;
    let author = store.write().await.delete_author(author_id)?;
    log::debug!("soft-deleted author at position {author_id}");
    Ok(Json(author))
}

// --- blogs ---

pub async fn list_blogs_by_author(
    State(store): State<SharedStore>,
    query: Result<Query<AuthorQuery>, QueryRejection>,
) -> Result<Json<Vec<Blog>>, Error> {
    let Query(query) = query?;
    let blogs = store.read().await.list_blogs_by_author(query.author_id)?;
    log::debug!("listing {} blogs for author {}", blogs.len(), query.author_id);
    Ok(Json(blogs))
}

pub async fn create_blog(
    State(store): State<SharedStore>,
    body: Result<Json<BlogRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Blog>), Error> {
    let Json(request) = body?;
    let blog = store.write().await.create_blog(request)?;
    log::debug!("created blog {} by author {}", blog.id, blog.author.id);
    Ok((StatusCode::CREATED, Json(blog)))
}

pub async fn replace_blog(
    State(store): State<SharedStore>,
    body: Result<Json<BlogRequest>, JsonRejection>,
) -> Result<Json<Blog>, Error> {
    let Json(request) = body?;
    let position = request.id;
    let blog = store.write().await.replace_blog(request)?;
    log::debug!("replaced blog at position {position}");
    Ok(Json(blog))
}

pub async fn patch_blog(
    State(store): State<SharedStore>,
    blog_id: Result<Path<i64>, PathRejection>,
    patch: Result<Query<BlogPatch>, QueryRejection>,
) -> Result<Json<Blog>, Error> {
    let Path(blog_id) = blog_id?;
    let Query(patch) = patch?;
    let blog = store.write().await.patch_blog(blog_id, patch)?;
    log::debug!("patched blog at position {blog_id}");
    Ok(Json(blog))
}

pub async fn like_blog(
    State(store): State<SharedStore>,
    query: Result<Query<BlogIdQuery>, QueryRejection>,
) -> Result<Json<Blog>, Error> {
    let Query(query) = query?;
    let blog = store.write().await.like_blog(query.blog_id)?;
    log::debug!("blog at position {} now has {} likes", query.blog_id, blog.likes);
    Ok(Json(blog))
}

pub async fn dislike_blog(
    State(store): State<SharedStore>,
    query: Result<Query<BlogIdQuery>, QueryRejection>,
) -> Result<Json<Blog>, Error> {
    let Query(query) = query?;
    let blog = store.write().await.dislike_blog(query.blog_id)?;
    log::debug!(
        "blog at position {} now has {} dislikes",
        query.blog_id,
        blog.dislikes
    );
    Ok(Json(blog))
}

pub async fn delete_blog(
    State(store): State<SharedStore>,
    blog_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Blog>, Error> {
    let Path(blog_id) = blog_id?;
    let blog = store.write().await.delete_blog(blog_id)?;
    log::debug!("soft-deleted blog at position {blog_id}");
    Ok(Json(blog))
}
