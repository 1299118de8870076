// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use queryset_derive::{Model, QuerySet};

pub struct Post;

#[derive(QuerySet)]
#[queryset(table = "blog.authors")]
pub struct Author {
    pub ID: i64,
    #[queryset(column = "display_name")]
    pub name: String,
    pub r#type: String,
    #[queryset(preload)]
    pub posts: Vec<Post>,
    #[queryset(skip)]
    pub cache: Vec<u8>
}

fn main() {
    let qs = Author::query_set(())
        .id_eq(1)
        .name_ne("bot".to_string())
        .type_in("admin".to_string(), ["editor".to_string()])
        .order_asc_by_name()
        .preload_posts()
        .preload_posts();

    assert_eq!(qs.db().scope().preloads, vec!["posts"]);
    assert_eq!(Author::TABLE, "blog.authors");
    assert_eq!(Author::COLUMNS, &["id", "display_name", "type"]);
    assert_eq!(AuthorDbSchema::DISPLAY_NAME.as_str(), "display_name");
    assert_eq!(AuthorDbSchema::TYPE.as_str(), "type");
}
