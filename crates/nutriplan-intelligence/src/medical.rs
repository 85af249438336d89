// ABOUTME: Medical condition guideline table for dietary and exercise advice
// ABOUTME: Static lookup from condition code to restriction, food, and exercise advice lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Medical condition guidelines
//!
//! General-audience advice only. Conditions without a dedicated entry resolve
//! to the empty guideline set used for [`MedicalCondition::None`].

use nutriplan_core::models::MedicalCondition;
use serde::Serialize;

/// Advice lists for one medical condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionGuidelines {
    /// Dietary restrictions to observe
    pub dietary_restrictions: &'static [&'static str],
    /// Foods to favour
    pub recommended_foods: &'static [&'static str],
    /// Foods to avoid or limit
    pub avoid_foods: &'static [&'static str],
    /// Adjustments to the exercise routine
    pub exercise_modifications: &'static [&'static str],
    /// Additional notes
    pub special_notes: &'static [&'static str],
}

impl ConditionGuidelines {
    /// True when the entry carries no advice at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dietary_restrictions.is_empty()
            && self.recommended_foods.is_empty()
            && self.avoid_foods.is_empty()
            && self.exercise_modifications.is_empty()
            && self.special_notes.is_empty()
    }
}

/// Diet-facing subset of the guidelines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryRecommendations {
    /// Condition the advice applies to
    pub condition: MedicalCondition,
    /// Dietary restrictions
    pub dietary_restrictions: &'static [&'static str],
    /// Foods to favour
    pub recommended_foods: &'static [&'static str],
    /// Foods to avoid
    pub avoid_foods: &'static [&'static str],
    /// Additional notes
    pub special_notes: &'static [&'static str],
}

/// Exercise-facing subset of the guidelines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecommendations {
    /// Condition the advice applies to
    pub condition: MedicalCondition,
    /// Exercise modifications
    pub exercise_modifications: &'static [&'static str],
    /// Additional notes
    pub special_notes: &'static [&'static str],
}

const NO_GUIDELINES: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[],
    recommended_foods: &[],
    avoid_foods: &[],
    exercise_modifications: &[],
    special_notes: &[],
};

const DIABETES_TYPE1: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[
        "Monitor carbohydrate intake carefully",
        "Maintain consistent meal timing",
        "Balance carbs with insulin dosing",
    ],
    recommended_foods: &[
        "Complex carbohydrates (quinoa, brown rice, oats)",
        "High-fiber vegetables (broccoli, spinach, brussels sprouts)",
        "Lean proteins (chicken breast, fish, tofu)",
        "Healthy fats (avocado, nuts, olive oil)",
        "Low-glycemic fruits (berries, apples, pears)",
    ],
    avoid_foods: &[
        "Simple sugars and refined carbs",
        "Sugary drinks and sodas",
        "Processed foods high in trans fats",
        "White bread and pastries",
        "High-sugar fruits (watermelon, pineapple)",
    ],
    exercise_modifications: &[
        "Check blood glucose before, during, and after exercise",
        "Carry fast-acting carbs during workouts",
        "Avoid exercise if blood glucose is very high or low",
        "Start with moderate intensity and gradually increase",
    ],
    special_notes: &[
        "Work closely with healthcare team for insulin management",
        "Keep detailed food and blood sugar logs",
        "Stay hydrated and monitor for hypoglycemia",
    ],
};

const DIABETES_TYPE2: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[
        "Limit refined carbohydrates and sugars",
        "Control portion sizes",
        "Focus on low glycemic index foods",
    ],
    recommended_foods: &[
        "Non-starchy vegetables (leafy greens, peppers, tomatoes)",
        "Whole grains (quinoa, brown rice, barley)",
        "Lean proteins (fish, poultry, legumes)",
        "Healthy fats (nuts, seeds, olive oil)",
        "Low-sugar fruits (berries, cherries, apples)",
    ],
    avoid_foods: &[
        "Refined sugars and sweets",
        "White bread and white rice",
        "Sugary beverages",
        "Processed and fried foods",
        "High-fat dairy products",
    ],
    exercise_modifications: &[
        "Aim for 150 minutes of moderate exercise per week",
        "Include both cardio and strength training",
        "Monitor blood sugar levels",
        "Exercise can help improve insulin sensitivity",
    ],
    special_notes: &[
        "Weight management is crucial",
        "Regular blood glucose monitoring",
        "Coordinate with healthcare provider for medication timing",
    ],
};

const HYPERTENSION: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[
        "Limit sodium intake to less than 2300mg daily",
        "Reduce saturated and trans fats",
        "Limit alcohol consumption",
    ],
    recommended_foods: &[
        "Potassium-rich foods (bananas, potatoes, spinach)",
        "Whole grains and high-fiber foods",
        "Low-fat dairy products",
        "Lean proteins (fish, poultry, beans)",
        "Fresh fruits and vegetables",
    ],
    avoid_foods: &[
        "High-sodium processed foods",
        "Canned soups and frozen meals",
        "Deli meats and cured meats",
        "Pickled and fermented foods",
        "Excessive caffeine",
    ],
    exercise_modifications: &[
        "Regular aerobic exercise can lower blood pressure",
        "Start slowly and gradually increase intensity",
        "Avoid sudden intense movements",
        "Monitor blood pressure before and after exercise",
    ],
    special_notes: &[
        "DASH diet is highly recommended",
        "Regular blood pressure monitoring",
        "Stress management is important",
    ],
};

const HEART_DISEASE: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[
        "Very low saturated fat and trans fat",
        "Limited cholesterol intake",
        "Controlled sodium intake",
    ],
    recommended_foods: &[
        "Omega-3 rich fish (salmon, mackerel, sardines)",
        "Whole grains and oats",
        "Nuts and seeds (walnuts, flaxseeds)",
        "Fruits and vegetables",
        "Lean proteins and legumes",
    ],
    avoid_foods: &[
        "Red meat and processed meats",
        "Full-fat dairy products",
        "Fried and fast foods",
        "Foods high in trans fats",
        "Excessive salt and sugar",
    ],
    exercise_modifications: &[
        "Exercise as prescribed by cardiologist",
        "Monitor heart rate during exercise",
        "Start with low-intensity activities",
        "Avoid exercising in extreme temperatures",
    ],
    special_notes: &[
        "Mediterranean diet is beneficial",
        "Regular cardiac check-ups",
        "Medication compliance is crucial",
    ],
};

const HIGH_CHOLESTEROL: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[
        "Limit saturated fats to less than 7% of calories",
        "Avoid trans fats completely",
        "Limit dietary cholesterol",
    ],
    recommended_foods: &[
        "Soluble fiber foods (oats, beans, apples)",
        "Fatty fish rich in omega-3s",
        "Nuts and seeds",
        "Plant sterols and stanols",
        "Olive oil and avocados",
    ],
    avoid_foods: &[
        "High-fat meats and organ meats",
        "Full-fat dairy products",
        "Egg yolks (limit to 2-3 per week)",
        "Processed and fried foods",
        "Coconut and palm oils",
    ],
    exercise_modifications: &[
        "Regular aerobic exercise helps raise HDL",
        "Include strength training 2-3 times per week",
        "Aim for 30 minutes of exercise daily",
        "Weight management supports cholesterol control",
    ],
    special_notes: &[
        "Regular lipid panel monitoring",
        "Portfolio diet can be effective",
        "Consider plant-based options",
    ],
};

const THYROID: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[
        "Monitor iodine intake if on thyroid medication",
        "Timing of meals with medication is important",
        "Some foods may interfere with thyroid function",
    ],
    recommended_foods: &[
        "Iodine-rich foods (seaweed, dairy, eggs)",
        "Selenium-rich foods (Brazil nuts, fish)",
        "Zinc-rich foods (pumpkin seeds, chickpeas)",
        "Anti-inflammatory foods",
        "Whole, unprocessed foods",
    ],
    avoid_foods: &[
        "Excessive soy products (may interfere with absorption)",
        "Cruciferous vegetables in large amounts (raw)",
        "Highly processed foods",
        "Excessive sugar and refined carbs",
    ],
    exercise_modifications: &[
        "Exercise may need adjustment based on thyroid levels",
        "Listen to your body - fatigue is common",
        "Include both cardio and strength training",
        "Start slowly if newly diagnosed",
    ],
    special_notes: &[
        "Take thyroid medication on empty stomach",
        "Regular thyroid function monitoring",
        "Symptoms may affect exercise tolerance",
    ],
};

const PCOS: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[
        "Low glycemic index foods",
        "Anti-inflammatory diet",
        "Limited refined carbohydrates",
    ],
    recommended_foods: &[
        "High-fiber foods (vegetables, legumes)",
        "Lean proteins (fish, poultry, plant proteins)",
        "Healthy fats (omega-3 rich foods)",
        "Low-glycemic fruits (berries, apples)",
        "Anti-inflammatory spices (turmeric, cinnamon)",
    ],
    avoid_foods: &[
        "Refined sugars and processed foods",
        "High glycemic index carbohydrates",
        "Trans fats and excessive saturated fats",
        "Sugary drinks and snacks",
        "Inflammatory foods",
    ],
    exercise_modifications: &[
        "Regular exercise helps with insulin resistance",
        "Combine cardio with strength training",
        "High-intensity interval training can be beneficial",
        "Exercise helps regulate hormones",
    ],
    special_notes: &[
        "Weight management is important",
        "Insulin resistance is common",
        "Regular monitoring of metabolic markers",
    ],
};

const CELIAC: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[
        "Strict gluten-free diet required",
        "Avoid cross-contamination",
        "Read all food labels carefully",
    ],
    recommended_foods: &[
        "Naturally gluten-free grains (rice, quinoa, millet)",
        "Fresh fruits and vegetables",
        "Lean meats and fish",
        "Dairy products (if tolerated)",
        "Certified gluten-free products",
    ],
    avoid_foods: &[
        "Wheat, barley, rye, and their derivatives",
        "Many processed foods containing gluten",
        "Beer and malt beverages",
        "Soy sauce (unless gluten-free)",
        "Cross-contaminated oats",
    ],
    exercise_modifications: &[
        "No specific exercise restrictions",
        "Ensure pre/post workout snacks are gluten-free",
        "Monitor energy levels during transition period",
        "Stay hydrated and maintain electrolyte balance",
    ],
    special_notes: &[
        "Complete gluten elimination is essential",
        "Regular follow-up with gastroenterologist",
        "May need vitamin/mineral supplementation",
    ],
};

const LACTOSE_INTOLERANCE: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[
        "Avoid or limit lactose-containing dairy",
        "Use lactase enzyme supplements if needed",
        "Check processed foods for hidden lactose",
    ],
    recommended_foods: &[
        "Lactose-free dairy alternatives",
        "Plant-based milks (almond, soy, oat)",
        "Aged cheeses (lower in lactose)",
        "Calcium-rich non-dairy foods (leafy greens, tofu)",
        "Probiotic foods may help digestion",
    ],
    avoid_foods: &[
        "Milk and fresh dairy products",
        "Ice cream and milk-based desserts",
        "Some processed foods with lactose",
        "Cream-based soups and sauces",
        "Milk chocolate",
    ],
    exercise_modifications: &[
        "No specific exercise restrictions",
        "Ensure adequate calcium intake for bone health",
        "Use lactose-free sports drinks if needed",
        "Monitor digestive comfort during exercise",
    ],
    special_notes: &[
        "Ensure adequate calcium and vitamin D intake",
        "Severity varies among individuals",
        "Lactase supplements can help with occasional dairy",
    ],
};

const KIDNEY_DISEASE: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[
        "Limit protein intake as advised by nephrologist",
        "Control phosphorus and potassium intake",
        "Limit sodium intake",
    ],
    recommended_foods: &[
        "High-quality proteins in controlled amounts",
        "Low-potassium fruits (apples, berries, grapes)",
        "Low-phosphorus foods",
        "Controlled fluid intake",
        "Fresh, unprocessed foods",
    ],
    avoid_foods: &[
        "High-potassium foods (bananas, oranges, potatoes)",
        "High-phosphorus foods (dairy, nuts, beans)",
        "Processed and canned foods",
        "Dark sodas and beer",
        "Excessive protein",
    ],
    exercise_modifications: &[
        "Exercise as tolerated and approved by physician",
        "Monitor fluid balance",
        "Adjust intensity based on energy levels",
        "Regular monitoring of kidney function",
    ],
    special_notes: &[
        "Work closely with renal dietitian",
        "Regular kidney function monitoring",
        "Medication timing is crucial",
    ],
};

const ARTHRITIS: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[
        "Anti-inflammatory diet focus",
        "Maintain healthy weight to reduce joint stress",
        "Limit inflammatory foods",
    ],
    recommended_foods: &[
        "Omega-3 rich fish (salmon, sardines)",
        "Anti-inflammatory foods (berries, leafy greens)",
        "Whole grains and legumes",
        "Nuts and seeds",
        "Colorful fruits and vegetables",
    ],
    avoid_foods: &[
        "Processed and fried foods",
        "Refined sugars and carbohydrates",
        "Excessive omega-6 oils",
        "Trans fats",
        "Excessive alcohol",
    ],
    exercise_modifications: &[
        "Low-impact exercises (swimming, cycling)",
        "Range of motion and flexibility exercises",
        "Strength training with proper form",
        "Avoid high-impact activities during flares",
    ],
    special_notes: &[
        "Weight management reduces joint stress",
        "Heat/cold therapy can complement exercise",
        "Regular rheumatology follow-up",
    ],
};

const ANEMIA: ConditionGuidelines = ConditionGuidelines {
    dietary_restrictions: &[
        "Focus on iron absorption enhancement",
        "Combine iron-rich foods with vitamin C",
        "Avoid iron inhibitors with iron-rich meals",
    ],
    recommended_foods: &[
        "Iron-rich foods (lean red meat, poultry, fish)",
        "Plant-based iron sources (spinach, lentils, tofu)",
        "Vitamin C rich foods (citrus, bell peppers)",
        "Folate-rich foods (leafy greens, fortified grains)",
        "B12 sources (meat, dairy, fortified foods)",
    ],
    avoid_foods: &[
        "Tea and coffee with iron-rich meals",
        "Calcium supplements with iron-rich meals",
        "Excessive fiber with iron sources",
        "Antacids during iron-rich meals",
    ],
    exercise_modifications: &[
        "Start with low-intensity exercise",
        "Gradually increase as iron levels improve",
        "Monitor for fatigue and shortness of breath",
        "Rest when needed and listen to your body",
    ],
    special_notes: &[
        "Regular blood work to monitor iron levels",
        "May need iron supplementation",
        "Address underlying cause of anemia",
    ],
};

/// Look up the guideline entry for a condition
#[must_use]
pub const fn guidelines_for(condition: MedicalCondition) -> &'static ConditionGuidelines {
    match condition {
        MedicalCondition::DiabetesType1 => &DIABETES_TYPE1,
        MedicalCondition::DiabetesType2 => &DIABETES_TYPE2,
        MedicalCondition::Hypertension => &HYPERTENSION,
        MedicalCondition::HeartDisease => &HEART_DISEASE,
        MedicalCondition::HighCholesterol => &HIGH_CHOLESTEROL,
        MedicalCondition::Thyroid => &THYROID,
        MedicalCondition::Pcos => &PCOS,
        MedicalCondition::Celiac => &CELIAC,
        MedicalCondition::LactoseIntolerance => &LACTOSE_INTOLERANCE,
        MedicalCondition::KidneyDisease => &KIDNEY_DISEASE,
        MedicalCondition::Arthritis => &ARTHRITIS,
        MedicalCondition::Anemia => &ANEMIA,
        // No dedicated entry yet
        MedicalCondition::None
        | MedicalCondition::FoodAllergies
        | MedicalCondition::LiverDisease
        | MedicalCondition::Osteoporosis => &NO_GUIDELINES,
    }
}

/// Diet-facing advice for a condition
#[must_use]
pub const fn dietary_recommendations(condition: MedicalCondition) -> DietaryRecommendations {
    let guidelines = guidelines_for(condition);
    DietaryRecommendations {
        condition,
        dietary_restrictions: guidelines.dietary_restrictions,
        recommended_foods: guidelines.recommended_foods,
        avoid_foods: guidelines.avoid_foods,
        special_notes: guidelines.special_notes,
    }
}

/// Exercise-facing advice for a condition
#[must_use]
pub const fn exercise_recommendations(condition: MedicalCondition) -> ExerciseRecommendations {
    let guidelines = guidelines_for(condition);
    ExerciseRecommendations {
        condition,
        exercise_modifications: guidelines.exercise_modifications,
        special_notes: guidelines.special_notes,
    }
}
