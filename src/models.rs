use serde::{Deserialize, Serialize};

// Declaration order is the on-disk column order; every value stays a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub box_type: String,
    pub title: String,
    pub slug: String,
    pub short_title: String,
    pub marketing_description: String,
    pub calories_kcal: String,
    pub protein_grams: String,
    pub fat_grams: String,
    pub carbs_grams: String,
    pub bulletpoint1: String,
    pub bulletpoint2: String,
    pub bulletpoint3: String,
    pub recipe_diet_type_id: String,
    pub season: String,
    pub base: String,
    pub protein_source: String,
    pub preparation_time_minutes: String,
    pub shelf_life_days: String,
    pub equipment_needed: String,
    pub origin_country: String,
    pub recipe_cuisine: String,
    pub in_your_box: String,
    pub gousto_reference: String,
}

impl Recipe {
    pub const FIELDS: [&'static str; 26] = [
        "id",
        "created_at",
        "updated_at",
        "box_type",
        "title",
        "slug",
        "short_title",
        "marketing_description",
        "calories_kcal",
        "protein_grams",
        "fat_grams",
        "carbs_grams",
        "bulletpoint1",
        "bulletpoint2",
        "bulletpoint3",
        "recipe_diet_type_id",
        "season",
        "base",
        "protein_source",
        "preparation_time_minutes",
        "shelf_life_days",
        "equipment_needed",
        "origin_country",
        "recipe_cuisine",
        "in_your_box",
        "gousto_reference",
    ];

    pub fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "id" => Some(&mut self.id),
            "created_at" => Some(&mut self.created_at),
            "updated_at" => Some(&mut self.updated_at),
            "box_type" => Some(&mut self.box_type),
            "title" => Some(&mut self.title),
            "slug" => Some(&mut self.slug),
            "short_title" => Some(&mut self.short_title),
            "marketing_description" => Some(&mut self.marketing_description),
            "calories_kcal" => Some(&mut self.calories_kcal),
            "protein_grams" => Some(&mut self.protein_grams),
            "fat_grams" => Some(&mut self.fat_grams),
            "carbs_grams" => Some(&mut self.carbs_grams),
            "bulletpoint1" => Some(&mut self.bulletpoint1),
            "bulletpoint2" => Some(&mut self.bulletpoint2),
            "bulletpoint3" => Some(&mut self.bulletpoint3),
            "recipe_diet_type_id" => Some(&mut self.recipe_diet_type_id),
            "season" => Some(&mut self.season),
            "base" => Some(&mut self.base),
            "protein_source" => Some(&mut self.protein_source),
            "preparation_time_minutes" => Some(&mut self.preparation_time_minutes),
            "shelf_life_days" => Some(&mut self.shelf_life_days),
            "equipment_needed" => Some(&mut self.equipment_needed),
            "origin_country" => Some(&mut self.origin_country),
            "recipe_cuisine" => Some(&mut self.recipe_cuisine),
            "in_your_box" => Some(&mut self.in_your_box),
            "gousto_reference" => Some(&mut self.gousto_reference),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub marketing_description: String,
}

impl RecipeSummary {
    pub fn of(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            marketing_description: recipe.marketing_description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisinePage {
    pub items: Vec<RecipeSummary>,
    pub page: u64,
    pub more: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CuisineQuery {
    #[serde(default)]
    pub page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_mut_rejects_unknown_columns() {
        let mut recipe = Recipe::default();
        assert!(recipe.field_mut("favourite_colour").is_none());
        assert!(recipe.field_mut("Box_Type").is_none());
    }

    #[test]
    fn field_mut_covers_every_column() {
        let mut recipe = Recipe::default();
        for field in Recipe::FIELDS {
            assert!(recipe.field_mut(field).is_some(), "missing slot for {field}");
        }
    }

    #[test]
    fn summary_projects_the_three_listing_columns() {
        let recipe = Recipe {
            id: "7".to_string(),
            title: "Pork Chilli".to_string(),
            marketing_description: "A spicy favourite".to_string(),
            ..Recipe::default()
        };
        let summary = RecipeSummary::of(&recipe);
        assert_eq!(summary.id, "7");
        assert_eq!(summary.title, "Pork Chilli");
        assert_eq!(summary.marketing_description, "A spicy favourite");
    }
}
