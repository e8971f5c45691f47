//! Skills partitioned by category.

use super::model::Skill;

/// Category assigned to skills that do not name one.
pub const OTHER_CATEGORY: &str = "Other";

/// One category and its skills in their original order.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Ordered mapping from category name to skills.
///
/// Categories keep the order in which they first appear in the input, so a
/// category-sorted skill list yields alphabetically ordered groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillGroups {
    groups: Vec<SkillGroup>,
}

impl SkillGroups {
    pub fn from_skills<I>(skills: I) -> Self
    where
        I: IntoIterator<Item = Skill>,
    {
        let mut groups: Vec<SkillGroup> = Vec::new();
        for skill in skills {
            let category = skill.category_or_other();
            match groups.iter_mut().find(|group| group.category == category) {
                Some(group) => group.skills.push(skill),
                None => groups.push(SkillGroup {
                    category: category.to_string(),
                    skills: vec![skill],
                }),
            }
        }
        Self { groups }
    }

    pub fn get(&self, category: &str) -> Option<&[Skill]> {
        self.groups
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.skills.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.category.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl IntoIterator for SkillGroups {
    type Item = SkillGroup;
    type IntoIter = std::vec::IntoIter<SkillGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
