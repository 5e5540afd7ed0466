use blog_core::model as sqlm;
use blog_core::source::PostFilter;
use sea_orm::sea_query::{Condition, Expr, LikeExpr, SimpleExpr};
use sea_orm::{ColumnTrait, JoinType, QueryFilter, QuerySelect, RelationTrait};

pub trait SelectPostFilter: Sized {
    fn post_filter(self, filter: &PostFilter) -> Self;
}

impl SelectPostFilter for sea_orm::Select<sqlm::post::Entity> {
    fn post_filter(self, filter: &PostFilter) -> Self {
        match filter {
            PostFilter::All => self,
            PostFilter::Archive { year, month } => match PostFilter::month_bounds(*year, *month) {
                Some((start, end)) => self
                    .filter(sqlm::post::Column::CreatedTime.gte(start))
                    .filter(sqlm::post::Column::CreatedTime.lt(end)),
                None => self.filter(Expr::val(1).eq(0)),
            },
            PostFilter::Category(id) => self.filter(sqlm::post::Column::CategoryId.eq(*id)),
            PostFilter::Tag(id) => self
                .join(JoinType::InnerJoin, sqlm::post::Relation::RelTag.def())
                .filter(
                    Expr::col((sqlm::rel_post_tag::Entity, sqlm::rel_post_tag::Column::TagId))
                        .eq(*id),
                ),
            PostFilter::Search(q) => self.filter(search_condition(q)),
        }
    }
}

const LIKE_ESCAPE: char = '!';

/// `%`, `_` and the escape char itself match literally.
fn like_pattern(s: &str) -> String {
    let mut pattern = String::with_capacity(s.len() + 2);
    pattern.push('%');
    for c in s.chars() {
        if c == LIKE_ESCAPE || c == '%' || c == '_' {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// sqlite LIKE folds ASCII case on both sides, the query text is passed as is
fn contains_ignore_case(col: sqlm::post::Column, s: &str) -> SimpleExpr {
    Expr::col((sqlm::post::Entity, col)).like(LikeExpr::new(like_pattern(s)).escape(LIKE_ESCAPE))
}

fn search_condition(q: &str) -> Condition {
    Condition::any()
        .add(contains_ignore_case(sqlm::post::Column::Title, q))
        .add(contains_ignore_case(sqlm::post::Column::Body, q))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern("50% off"), "%50!% off%");
        assert_eq!(like_pattern("a_b"), "%a!_b%");
        assert_eq!(like_pattern("wow!"), "%wow!!%");
        assert_eq!(like_pattern("c:\\tmp"), "%c:\\tmp%");
        assert_eq!(like_pattern("Élan"), "%Élan%");
    }
}
