use nearch_entities::display_item::DisplayItem;

pub trait SortByName {
    /// Stable alphabetical order of the display names.
    fn sort_by_name(&mut self);
}

impl SortByName for [DisplayItem] {
    fn sort_by_name(&mut self) {
        self.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearch_entities::builders::*;

    fn new_item(id: &str, name: &str) -> DisplayItem {
        DisplayItem::build().id(id).name(name).finish()
    }

    #[test]
    fn sort_alphabetically() {
        let mut items = vec![
            new_item("1", "Museum"),
            new_item("2", "Castle"),
            new_item("3", "Abbey"),
        ];
        items.sort_by_name();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(vec!["Abbey", "Castle", "Museum"], names);
    }

    #[test]
    fn keep_order_of_equal_names() {
        let mut items = vec![
            new_item("b", "Tower"),
            new_item("x", "Bridge"),
            new_item("a", "Tower"),
        ];
        items.sort_by_name();
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(vec!["x", "b", "a"], ids);
    }

    #[test]
    fn uppercase_before_lowercase() {
        let mut items = vec![new_item("1", "abbey"), new_item("2", "Zoo")];
        items.sort_by_name();
        assert_eq!("Zoo", items[0].name);
    }
}
