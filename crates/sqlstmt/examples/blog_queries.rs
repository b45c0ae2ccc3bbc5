//! Builds the blog backend's derived queries from a handful of templates.
//!
//! Run with:
//!   cargo run --example blog_queries -p sqlstmt

use sqlstmt::{Statement, StmtResult, Template};
use std::sync::LazyLock;

static POST_COUNT: LazyLock<Template> =
    LazyLock::new(|| Template::new("post_count", Statement::select("count(*)").from("posts")));

static COMMENTS: LazyLock<Template> = LazyLock::new(|| {
    Template::new(
        "comments",
        Statement::select(
            "id, post_id, author, author_email, author_url, created_at, content, approved, agent, parent, user_id",
        )
        .from("comments"),
    )
});

static MESSAGES: LazyLock<Template> = LazyLock::new(|| {
    Template::new(
        "messages",
        Statement::select("id, type, data, is_read, created_at").from("messages"),
    )
});

fn main() -> StmtResult<()> {
    let queries = [
        (
            "posts_count_by_tag",
            POST_COUNT
                .copy()
                .from("posts, posts_tags")
                .where_([
                    "posts_tags.post_id = posts.id",
                    "posts_tags.tag_id = ?",
                    "posts.published",
                ]),
        ),
        (
            "all_comments",
            COMMENTS
                .copy()
                .order_by("created_at DESC")
                .paginate_bound(),
        ),
        (
            "approved_comments",
            COMMENTS
                .copy()
                .where_("approved = 1")
                .order_by("created_at DESC")
                .paginate_bound(),
        ),
        ("comment_by_id", COMMENTS.copy().where_("id = ?")),
        (
            "approved_comments_for_post",
            COMMENTS
                .copy()
                .where_(["post_id = ?", "approved = 1"])
                .order_by("created_at DESC"),
        ),
        (
            "unread_messages",
            MESSAGES
                .copy()
                .where_("is_read = 0")
                .order_by("created_at DESC")
                .paginate_bound(),
        ),
        (
            "delete_comment",
            Statement::raw("DELETE").from("comments").where_("id = ?"),
        ),
    ];

    for (name, stmt) in &queries {
        stmt.validate()?;
        println!("{name}:\n  {stmt}\n");
    }

    println!("comment_count:\n  {}", COMMENTS.count_sql());
    Ok(())
}
