// ABOUTME: Diet plan template: health summary, seven-day menu, and medical considerations
// ABOUTME: Menu and protein sources follow the dietary preference, portions follow the calorie target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::{DietaryPreference, MedicalCondition, UserProfile};
use nutriplan_intelligence::nutrition_calculator::{round_to_u32, DailyNutritionNeeds};
use nutriplan_intelligence::dietary_recommendations;

use super::html::HtmlFragment;

/// Share of the daily target for each meal
const BREAKFAST_SHARE: f64 = 0.25;
const LUNCH_SHARE: f64 = 0.35;
const DINNER_SHARE: f64 = 0.30;
const SNACK_SHARE: f64 = 0.10;

const HYDRATION_TIP: &str = "Drink 8-10 glasses of water daily";

/// One day of the weekly menu
struct DayMenu {
    day: &'static str,
    theme: &'static str,
    breakfast: &'static str,
    lunch: &'static str,
    dinner: &'static str,
    snack: &'static str,
}

const BALANCED_WEEK: [DayMenu; 7] = [
    DayMenu {
        day: "Monday",
        theme: "Power Start",
        breakfast: "Oatmeal with berries",
        lunch: "Grilled chicken salad",
        dinner: "Salmon with quinoa",
        snack: "Greek yogurt with honey",
    },
    DayMenu {
        day: "Tuesday",
        theme: "Lean and Green",
        breakfast: "Scrambled eggs on wholegrain toast",
        lunch: "Turkey and avocado wrap",
        dinner: "Baked cod with roasted vegetables",
        snack: "Apple with peanut butter",
    },
    DayMenu {
        day: "Wednesday",
        theme: "Midweek Fuel",
        breakfast: "Greek yogurt parfait with granola",
        lunch: "Chicken and brown rice bowl",
        dinner: "Lean beef stir-fry with broccoli",
        snack: "Handful of almonds",
    },
    DayMenu {
        day: "Thursday",
        theme: "Omega Boost",
        breakfast: "Spinach and mushroom omelette",
        lunch: "Tuna salad with mixed greens",
        dinner: "Grilled chicken with sweet potato",
        snack: "Cottage cheese with pineapple",
    },
    DayMenu {
        day: "Friday",
        theme: "Protein Focus",
        breakfast: "Protein smoothie with banana",
        lunch: "Grilled chicken quinoa bowl",
        dinner: "Shrimp with wholewheat pasta",
        snack: "Hard-boiled eggs",
    },
    DayMenu {
        day: "Saturday",
        theme: "Weekend Balance",
        breakfast: "Wholegrain pancakes with berries",
        lunch: "Chicken and vegetable soup",
        dinner: "Baked salmon with asparagus",
        snack: "Carrot sticks with hummus",
    },
    DayMenu {
        day: "Sunday",
        theme: "Prep and Reset",
        breakfast: "Avocado toast with poached egg",
        lunch: "Turkey chili with beans",
        dinner: "Roast chicken with mixed vegetables",
        snack: "Mixed berries",
    },
];

const VEGETARIAN_WEEK: [DayMenu; 7] = [
    DayMenu {
        day: "Monday",
        theme: "Power Start",
        breakfast: "Oatmeal with berries",
        lunch: "Grilled paneer salad",
        dinner: "Lentil curry with quinoa",
        snack: "Greek yogurt with honey",
    },
    DayMenu {
        day: "Tuesday",
        theme: "Lean and Green",
        breakfast: "Scrambled eggs on wholegrain toast",
        lunch: "Halloumi and roasted vegetable wrap",
        dinner: "Vegetable lasagna with side salad",
        snack: "Apple with peanut butter",
    },
    DayMenu {
        day: "Wednesday",
        theme: "Midweek Fuel",
        breakfast: "Greek yogurt parfait with granola",
        lunch: "Paneer and brown rice bowl",
        dinner: "Vegetable stir-fry with eggs and noodles",
        snack: "Handful of almonds",
    },
    DayMenu {
        day: "Thursday",
        theme: "Fiber Boost",
        breakfast: "Spinach and mushroom omelette",
        lunch: "Chickpea salad with feta",
        dinner: "Black bean burrito bowl",
        snack: "Cottage cheese with pineapple",
    },
    DayMenu {
        day: "Friday",
        theme: "Protein Focus",
        breakfast: "Protein smoothie with banana",
        lunch: "Grilled paneer quinoa bowl",
        dinner: "Spinach and ricotta stuffed peppers",
        snack: "Hard-boiled eggs",
    },
    DayMenu {
        day: "Saturday",
        theme: "Weekend Balance",
        breakfast: "Wholegrain pancakes with berries",
        lunch: "Minestrone soup with wholegrain bread",
        dinner: "Paneer tikka with brown rice",
        snack: "Carrot sticks with hummus",
    },
    DayMenu {
        day: "Sunday",
        theme: "Prep and Reset",
        breakfast: "Avocado toast with poached egg",
        lunch: "Three-bean chili",
        dinner: "Mushroom risotto with peas",
        snack: "Mixed berries",
    },
];

const PLANT_BASED_WEEK: [DayMenu; 7] = [
    DayMenu {
        day: "Monday",
        theme: "Power Start",
        breakfast: "Oatmeal with berries",
        lunch: "Grilled tofu salad",
        dinner: "Lentil curry with quinoa",
        snack: "Soy yogurt with chia seeds",
    },
    DayMenu {
        day: "Tuesday",
        theme: "Lean and Green",
        breakfast: "Tofu scramble on wholegrain toast",
        lunch: "Hummus and roasted vegetable wrap",
        dinner: "Chickpea and spinach stew",
        snack: "Apple with peanut butter",
    },
    DayMenu {
        day: "Wednesday",
        theme: "Midweek Fuel",
        breakfast: "Chia pudding with mango",
        lunch: "Tempeh and brown rice bowl",
        dinner: "Tofu stir-fry with broccoli",
        snack: "Handful of almonds",
    },
    DayMenu {
        day: "Thursday",
        theme: "Fiber Boost",
        breakfast: "Peanut butter banana smoothie",
        lunch: "Quinoa and black bean salad",
        dinner: "Lentil bolognese with wholewheat pasta",
        snack: "Roasted chickpeas",
    },
    DayMenu {
        day: "Friday",
        theme: "Protein Focus",
        breakfast: "Pea protein smoothie with berries",
        lunch: "Grilled tofu quinoa bowl",
        dinner: "Black bean burgers with sweet potato",
        snack: "Edamame",
    },
    DayMenu {
        day: "Saturday",
        theme: "Weekend Balance",
        breakfast: "Buckwheat pancakes with berries",
        lunch: "Minestrone soup with wholegrain bread",
        dinner: "Vegetable and tofu curry with brown rice",
        snack: "Carrot sticks with hummus",
    },
    DayMenu {
        day: "Sunday",
        theme: "Prep and Reset",
        breakfast: "Avocado toast with seeds",
        lunch: "Three-bean chili",
        dinner: "Stuffed peppers with lentils and rice",
        snack: "Mixed berries",
    },
];

/// Title word for the weekly plan
#[must_use]
pub const fn diet_type_label(preference: DietaryPreference) -> &'static str {
    match preference {
        DietaryPreference::Vegan => "Plant-based",
        DietaryPreference::Vegetarian => "Vegetarian",
        DietaryPreference::NonVegetarian => "Balanced",
    }
}

const fn week_for(preference: DietaryPreference) -> &'static [DayMenu; 7] {
    match preference {
        DietaryPreference::Vegan => &PLANT_BASED_WEEK,
        DietaryPreference::Vegetarian => &VEGETARIAN_WEEK,
        DietaryPreference::NonVegetarian => &BALANCED_WEEK,
    }
}

/// Calories per meal, in breakfast/lunch/dinner/snack order
#[must_use]
pub fn meal_calories(daily_calories: u32) -> [u32; 4] {
    let daily = f64::from(daily_calories);
    [
        round_to_u32(daily * BREAKFAST_SHARE),
        round_to_u32(daily * LUNCH_SHARE),
        round_to_u32(daily * DINNER_SHARE),
        round_to_u32(daily * SNACK_SHARE),
    ]
}

/// Render the diet plan fragment for a profile and its computed needs
#[must_use]
pub fn render_diet_plan(profile: &UserProfile, needs: &DailyNutritionNeeds) -> String {
    let daily_calories = needs.daily_calories();
    let mut html = HtmlFragment::new();

    html.heading("Health Summary")
        .labeled(
            "BMI",
            &format!("{:.1} ({})", needs.bmi_rounded(), needs.bmi_category),
        )
        .labeled(
            "Daily Calories",
            &format!(
                "{daily_calories} kcal for {}",
                profile.health_goal.label()
            ),
        )
        .labeled(
            "Macros",
            &format!(
                "{}g protein, {}g carbs, {}g fat",
                needs.macros.protein_g, needs.macros.carbs_g, needs.macros.fat_g
            ),
        );

    html.heading(&format!(
        "Weekly {} Diet Plan",
        diet_type_label(profile.dietary_preference)
    ));

    let [breakfast, lunch, dinner, snack] = meal_calories(daily_calories);
    for menu in week_for(profile.dietary_preference) {
        html.labeled(menu.day, menu.theme).list([
            format!("Breakfast: {} ({breakfast} cal)", menu.breakfast),
            format!("Lunch: {} ({lunch} cal)", menu.lunch),
            format!("Dinner: {} ({dinner} cal)", menu.dinner),
            format!("Snack: {} ({snack} cal)", menu.snack),
        ]);
    }
    html.paragraph(HYDRATION_TIP);

    if profile.medical_condition != MedicalCondition::None {
        let advice = dietary_recommendations(profile.medical_condition);
        html.heading("Medical Considerations")
            .labeled("Condition", profile.medical_condition.display_name())
            .labeled_list("Dietary Restrictions", advice.dietary_restrictions)
            .labeled_list("Recommended Foods", advice.recommended_foods)
            .labeled_list("Foods to Avoid", advice.avoid_foods)
            .labeled_list("Notes", advice.special_notes)
            .paragraph("Consult your doctor before making significant dietary changes.");
    }

    html.finish()
}
