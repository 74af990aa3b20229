use uuid::Uuid;

use crate::models::Category;

/// Parent/child view over one snapshot of the category list.
///
/// Built per request from the immutable snapshot the caller supplies;
/// answers "what are the children of category X?" so a parent-category
/// filter can expand to its children's products.
///
/// Lookups resolve names by exact, case-sensitive match. A name that matches
/// nothing degrades to "no children known" rather than an error, and a child
/// with a dangling `parent_id` is simply never returned as anyone's child.
#[derive(Debug)]
pub struct CategoryIndex<'a> {
    all: &'a [Category],
    top_level: Vec<&'a Category>,
    children: Vec<&'a Category>,
}

impl<'a> CategoryIndex<'a> {
    /// Partitions the snapshot into top-level and child groups, preserving
    /// input order within each group. O(n) in the category count.
    pub fn build(categories: &'a [Category]) -> Self {
        let (top_level, children) = categories.iter().partition(|c| c.is_top_level());
        Self {
            all: categories,
            top_level,
            children,
        }
    }

    /// Resolves a name to its category record. On duplicate names (which the
    /// admin surface should prevent) the first match in input order wins.
    fn resolve(&self, name: &str) -> Option<&'a Category> {
        self.all.iter().find(|c| c.name == name)
    }

    /// Names of the direct children of the named category, in their original
    /// relative order. Unknown names yield an empty list.
    pub fn child_names_of(&self, name: &str) -> Vec<&'a str> {
        let Some(parent) = self.resolve(name) else {
            return Vec::new();
        };
        self.children
            .iter()
            .filter(|c| c.parent_id == Some(parent.id))
            .map(|c| c.name.as_str())
            .collect()
    }

    /// True iff the named category exists and has no parent.
    pub fn is_top_level(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(Category::is_top_level)
    }

    /// Top-level categories in input order, for the header nav, sidebar,
    /// and footer surfaces.
    pub fn top_level(&self) -> &[&'a Category] {
        &self.top_level
    }

    /// Direct children of the category with the given id, in input order.
    pub fn children_of(&self, parent_id: Uuid) -> Vec<&'a Category> {
        self.children
            .iter()
            .filter(|c| c.parent_id == Some(parent_id))
            .copied()
            .collect()
    }

    /// The category's own id plus the ids of its direct children, for
    /// cascading admin deletes. Only one nesting level is modeled, so there
    /// is no grandchild collection.
    pub fn cascade_ids(&self, id: Uuid) -> Vec<Uuid> {
        let mut ids = vec![id];
        ids.extend(self.children_of(id).iter().map(|c| c.id));
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, parent_id: Option<Uuid>, order: i32) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_id,
            order,
        }
    }

    fn sample() -> Vec<Category> {
        let kirtasiye = category("Kırtasiye", None, 0);
        let ofis = category("Ofis", None, 1);
        let kalem = category("Kalem", Some(kirtasiye.id), 0);
        let defter = category("Defter", Some(kirtasiye.id), 1);
        vec![kirtasiye, kalem, ofis, defter]
    }

    #[test]
    fn children_come_back_in_input_order() {
        let categories = sample();
        let index = CategoryIndex::build(&categories);
        assert_eq!(index.child_names_of("Kırtasiye"), vec!["Kalem", "Defter"]);
    }

    #[test]
    fn parent_is_not_its_own_child() {
        let categories = sample();
        let index = CategoryIndex::build(&categories);
        assert!(!index.child_names_of("Kırtasiye").contains(&"Kırtasiye"));
    }

    #[test]
    fn unknown_name_has_no_children_and_is_not_top_level() {
        let categories = sample();
        let index = CategoryIndex::build(&categories);
        assert!(index.child_names_of("Oyuncak").is_empty());
        assert!(!index.is_top_level("Oyuncak"));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let categories = sample();
        let index = CategoryIndex::build(&categories);
        assert!(index.child_names_of("kırtasiye").is_empty());
    }

    #[test]
    fn leaf_category_has_no_children() {
        let categories = sample();
        let index = CategoryIndex::build(&categories);
        assert!(index.child_names_of("Kalem").is_empty());
        assert!(!index.is_top_level("Kalem"));
        assert!(index.is_top_level("Ofis"));
    }

    #[test]
    fn dangling_parent_id_is_never_anyones_child() {
        let mut categories = sample();
        categories.push(category("Silgi", Some(Uuid::new_v4()), 2));
        let index = CategoryIndex::build(&categories);
        assert_eq!(index.child_names_of("Kırtasiye"), vec!["Kalem", "Defter"]);
        // The orphan still resolves by name; it just belongs to nobody.
        assert!(!index.is_top_level("Silgi"));
        assert!(index.child_names_of("Silgi").is_empty());
    }

    #[test]
    fn duplicate_names_resolve_to_first_in_input_order() {
        let first = category("Kalem", None, 0);
        let second = category("Kalem", None, 1);
        let child = category("Tükenmez", Some(first.id), 0);
        let categories = vec![first, second, child];
        let index = CategoryIndex::build(&categories);
        assert_eq!(index.child_names_of("Kalem"), vec!["Tükenmez"]);
    }

    #[test]
    fn empty_snapshot_treats_every_query_as_unknown() {
        let index = CategoryIndex::build(&[]);
        assert!(index.child_names_of("Kalem").is_empty());
        assert!(!index.is_top_level("Kalem"));
        assert!(index.top_level().is_empty());
    }

    #[test]
    fn cascade_ids_cover_category_and_direct_children_only() {
        let categories = sample();
        let index = CategoryIndex::build(&categories);
        let ids = index.cascade_ids(categories[0].id);
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0], categories[0].id);
        assert!(ids.contains(&categories[1].id));
        assert!(ids.contains(&categories[3].id));
        // A leaf cascades to itself only.
        assert_eq!(index.cascade_ids(categories[1].id), vec![categories[1].id]);
    }
}
