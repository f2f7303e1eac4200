//! Topic grouping: comments and mitigation strategies by environmental
//! category.

use serde::Serialize;

use crate::comment::Comment;
use crate::enums::EnvironmentalCategory;
use crate::mitigation::MitigationStrategy;

/// Comments and mitigation strategies sharing one environmental category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentGroup {
    pub category: EnvironmentalCategory,

    pub comments: Vec<Comment>,

    pub mitigation_strategies: Vec<MitigationStrategy>,
}

/// Groups one project's comments and strategies by environmental category.
///
/// A category with strategies but no comments still gets a group. Groups are
/// ordered by descending comment count (stable: first-seen order breaks
/// ties). Within a group, comments are ordered by priority severity,
/// critical first. Custom priorities rank below the built-in ones.
///
/// Inputs must already be scoped to the project.
pub fn group_by_topic(
    comments: &[Comment],
    strategies: &[MitigationStrategy],
) -> Vec<CommentGroup> {
    let mut groups: Vec<CommentGroup> = Vec::new();

    fn group_for<'a>(
        groups: &'a mut Vec<CommentGroup>,
        category: &EnvironmentalCategory,
    ) -> &'a mut CommentGroup {
        if let Some(idx) = groups.iter().position(|g| &g.category == category) {
            &mut groups[idx]
        } else {
            groups.push(CommentGroup {
                category: category.clone(),
                comments: Vec::new(),
                mitigation_strategies: Vec::new(),
            });
            groups.last_mut().expect("just pushed")
        }
    }

    for comment in comments {
        group_for(&mut groups, &comment.environmental_category)
            .comments
            .push(comment.clone());
    }

    for strategy in strategies {
        group_for(&mut groups, &strategy.environmental_category)
            .mitigation_strategies
            .push(strategy.clone());
    }

    for group in &mut groups {
        group
            .comments
            .sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
    }

    groups.sort_by(|a, b| b.comments.len().cmp(&a.comments.len()));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Priority;

    fn comment(category: EnvironmentalCategory, priority: Priority) -> Comment {
        Comment {
            project_id: "proj-1".into(),
            environmental_category: category,
            priority,
            ..Default::default()
        }
    }

    fn strategy(category: EnvironmentalCategory) -> MitigationStrategy {
        MitigationStrategy {
            project_id: "proj-1".into(),
            environmental_category: category,
            ..Default::default()
        }
    }

    #[test]
    fn every_comment_lands_in_exactly_one_group() {
        let comments = vec![
            comment(EnvironmentalCategory::Birds, Priority::High),
            comment(EnvironmentalCategory::Birds, Priority::Critical),
            comment(EnvironmentalCategory::Noise, Priority::Medium),
            comment(EnvironmentalCategory::Water, Priority::High),
        ];
        let groups = group_by_topic(&comments, &[]);
        let total: usize = groups.iter().map(|g| g.comments.len()).sum();
        assert_eq!(total, comments.len());
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn groups_sorted_by_comment_count_descending() {
        let comments = vec![
            comment(EnvironmentalCategory::Noise, Priority::Low),
            comment(EnvironmentalCategory::Birds, Priority::Low),
            comment(EnvironmentalCategory::Birds, Priority::Low),
            comment(EnvironmentalCategory::Birds, Priority::Low),
            comment(EnvironmentalCategory::Noise, Priority::Low),
        ];
        let groups = group_by_topic(&comments, &[]);
        assert_eq!(groups[0].category, EnvironmentalCategory::Birds);
        assert_eq!(groups[0].comments.len(), 3);
        assert_eq!(groups[1].comments.len(), 2);
    }

    #[test]
    fn comments_within_group_ordered_by_severity() {
        let comments = vec![
            comment(EnvironmentalCategory::Birds, Priority::Low),
            comment(EnvironmentalCategory::Birds, Priority::Critical),
            comment(EnvironmentalCategory::Birds, Priority::Medium),
            comment(EnvironmentalCategory::Birds, Priority::High),
        ];
        let groups = group_by_topic(&comments, &[]);
        let priorities: Vec<_> = groups[0].comments.iter().map(|c| c.priority.clone()).collect();
        assert_eq!(
            priorities,
            vec![
                Priority::Critical,
                Priority::High,
                Priority::Medium,
                Priority::Low
            ]
        );
    }

    #[test]
    fn category_with_only_strategies_still_appears() {
        let comments = vec![comment(EnvironmentalCategory::Birds, Priority::High)];
        let strategies = vec![strategy(EnvironmentalCategory::Vegetation)];
        let groups = group_by_topic(&comments, &strategies);
        assert_eq!(groups.len(), 2);

        let vegetation = groups
            .iter()
            .find(|g| g.category == EnvironmentalCategory::Vegetation)
            .unwrap();
        assert!(vegetation.comments.is_empty());
        assert_eq!(vegetation.mitigation_strategies.len(), 1);
        // Zero comments sorts after the birds group.
        assert_eq!(groups[0].category, EnvironmentalCategory::Birds);
    }

    #[test]
    fn strategies_attach_to_matching_group() {
        let comments = vec![comment(EnvironmentalCategory::Noise, Priority::High)];
        let strategies = vec![
            strategy(EnvironmentalCategory::Noise),
            strategy(EnvironmentalCategory::Noise),
        ];
        let groups = group_by_topic(&comments, &strategies);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].mitigation_strategies.len(), 2);
    }
}
