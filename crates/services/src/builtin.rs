//! The built-in experiment catalog.
//!
//! Reference data for the simulated lab: every experiment here is immutable,
//! validated at construction, and keyed by a stable kebab-case id.

use chemlab_core::catalog::Catalog;
use chemlab_core::model::{
    Difficulty, Experiment, ExperimentId, ExperimentMeta, QuizQuestion, SafetyLevel, Step,
};

/// Builds the built-in catalog.
///
/// # Panics
///
/// Panics if the built-in data fails validation; the catalog is static, so
/// this cannot happen for a correctly authored data set (and the tests below
/// exercise exactly that).
#[must_use]
pub fn builtin_catalog() -> Catalog {
    Catalog::new(vec![
        elephant_toothpaste(),
        golden_rain(),
        ph_rainbow(),
        chemical_volcano(),
        crystal_garden(),
        color_changing_milk(),
    ])
    .expect("built-in catalog should be valid")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn step(
    ordinal: usize,
    title: &str,
    description: &str,
    instructions: &[&str],
    safety_notes: &[&str],
    expected_result: &str,
    tips: &[&str],
) -> Step {
    Step::new(
        ordinal,
        title,
        description,
        strings(instructions),
        strings(safety_notes),
        expected_result,
        strings(tips),
    )
    .expect("built-in step should be valid")
}

fn question(text: &str, options: &[&str], correct: usize, explanation: &str) -> QuizQuestion {
    QuizQuestion::new(text, strings(options), correct, explanation)
        .expect("built-in quiz question should be valid")
}

fn experiment(
    id: &str,
    name: &str,
    description: &str,
    meta: ExperimentMeta,
    materials: &[&str],
    learning_objectives: &[&str],
    steps: Vec<Step>,
    quiz: Vec<QuizQuestion>,
) -> Experiment {
    Experiment::new(
        ExperimentId::new(id).expect("built-in experiment id should be valid"),
        name,
        description,
        meta,
        strings(materials),
        strings(learning_objectives),
        steps,
        quiz,
    )
    .expect("built-in experiment should be valid")
}

fn elephant_toothpaste() -> Experiment {
    experiment(
        "elephant-toothpaste",
        "Elephant's Toothpaste",
        "Create a spectacular foam eruption using hydrogen peroxide catalysis",
        ExperimentMeta::new(
            Difficulty::Beginner,
            "10 min",
            SafetyLevel::Medium,
            "Catalysis",
        )
        .with_rating(4.9)
        .with_participants(2100),
        &[
            "30% Hydrogen Peroxide (100ml)",
            "Potassium Iodide (10g)",
            "Liquid Dish Soap (30ml)",
            "Food Coloring (optional)",
            "Large graduated cylinder",
            "Safety goggles",
            "Gloves",
        ],
        &[
            "Understand catalysis and reaction rates",
            "Observe decomposition reactions",
            "Learn about exothermic reactions",
            "Practice laboratory safety",
        ],
        vec![
            step(
                0,
                "Safety Preparation",
                "Put on all required safety equipment",
                &[
                    "Put on safety goggles",
                    "Wear protective gloves",
                    "Ensure work area is clear",
                    "Have towels ready for cleanup",
                ],
                &[
                    "Never remove safety equipment during experiment",
                    "Hydrogen peroxide can cause burns",
                    "Work in well-ventilated area",
                ],
                "All safety equipment properly worn",
                &["Double-check all equipment before proceeding"],
            ),
            step(
                1,
                "Prepare the Cylinder",
                "Set up the reaction vessel",
                &[
                    "Place large graduated cylinder in center of workspace",
                    "Add 2-3 drops of food coloring to cylinder",
                    "Add 30ml of liquid dish soap",
                    "Gently swirl to mix coloring and soap",
                ],
                &[
                    "Handle glassware carefully",
                    "Keep cylinder stable and upright",
                ],
                "Colored soap solution in bottom of cylinder",
                &["Use bright colors for better visual effect"],
            ),
            step(
                2,
                "Add Hydrogen Peroxide",
                "Carefully add the hydrogen peroxide",
                &[
                    "Measure 100ml of 30% hydrogen peroxide",
                    "Slowly pour into the cylinder",
                    "Avoid splashing or spilling",
                    "Do not mix yet",
                ],
                &[
                    "30% hydrogen peroxide is highly concentrated",
                    "Avoid contact with skin",
                    "Pour slowly to prevent splashing",
                ],
                "Clear hydrogen peroxide layer above soap",
                &["Pour down the side of the cylinder for layering effect"],
            ),
            step(
                3,
                "Prepare Catalyst",
                "Prepare the potassium iodide solution",
                &[
                    "In separate beaker, dissolve 10g KI in 50ml warm water",
                    "Stir until completely dissolved",
                    "Solution should be clear",
                    "Have this ready to add quickly",
                ],
                &[
                    "KI is generally safe but avoid ingestion",
                    "Wash hands after handling",
                ],
                "Clear potassium iodide solution",
                &["Warm water helps KI dissolve faster"],
            ),
            step(
                4,
                "The Reaction",
                "Add catalyst and observe the reaction",
                &[
                    "Quickly pour KI solution into cylinder",
                    "Step back immediately",
                    "Observe the rapid foam formation",
                    "Do not touch the foam - it's hot!",
                ],
                &[
                    "Reaction is exothermic (produces heat)",
                    "Foam will be hot - do not touch",
                    "Stand clear of the cylinder",
                ],
                "Rapid formation of colored foam shooting upward",
                &["Have camera ready - reaction happens quickly!"],
            ),
            step(
                5,
                "Observation and Cleanup",
                "Record observations and clean up safely",
                &[
                    "Record color, height, and duration of foam",
                    "Wait for foam to cool before cleanup",
                    "Dispose of materials properly",
                    "Clean all equipment thoroughly",
                ],
                &[
                    "Let foam cool completely before handling",
                    "Dispose according to local regulations",
                ],
                "Complete documentation and safe cleanup",
                &["Take photos/videos for your lab report"],
            ),
        ],
        vec![
            question(
                "What role does potassium iodide play in this reaction?",
                &["Reactant", "Catalyst", "Product", "Inhibitor"],
                1,
                "KI acts as a catalyst, speeding up the decomposition of H₂O₂ without being consumed.",
            ),
            question(
                "Why does the reaction produce foam?",
                &[
                    "CO₂ gas is produced",
                    "O₂ gas is trapped by soap",
                    "H₂ gas is released",
                    "Water vapor forms",
                ],
                1,
                "The decomposition of H₂O₂ produces O₂ gas, which gets trapped by the soap to form foam.",
            ),
            question(
                "Why is the foam hot?",
                &[
                    "The reaction is endothermic",
                    "The reaction is exothermic",
                    "Friction creates heat",
                    "The soap generates heat",
                ],
                1,
                "The decomposition of hydrogen peroxide is exothermic, releasing energy as heat.",
            ),
        ],
    )
}

fn golden_rain() -> Experiment {
    experiment(
        "golden-rain",
        "Golden Rain",
        "Create beautiful golden crystals through a precipitation reaction using lead iodide formation.",
        ExperimentMeta::new(
            Difficulty::Intermediate,
            "15 min",
            SafetyLevel::High,
            "Precipitation",
        )
        .with_rating(4.8)
        .with_participants(1250),
        &["Lead Nitrate", "Potassium Iodide", "Distilled Water", "Beakers"],
        &["Precipitation reactions", "Crystal formation", "Chemical equations"],
        vec![
            step(
                0,
                "Prepare Solutions",
                "Dissolve both salts in separate beakers",
                &[
                    "Dissolve lead nitrate in 100ml of distilled water",
                    "Dissolve potassium iodide in a second beaker",
                    "Stir each until fully clear",
                ],
                &[
                    "Lead compounds are toxic - wear gloves",
                    "Never pipette by mouth",
                ],
                "Two clear, colorless solutions",
                &["Use distilled water to avoid cloudy solutions"],
            ),
            step(
                1,
                "Combine and Precipitate",
                "Mix the solutions and watch the yellow precipitate form",
                &[
                    "Slowly pour the iodide solution into the lead nitrate beaker",
                    "Observe the immediate yellow cloud of lead iodide",
                ],
                &["Keep the mixture away from skin and eyes"],
                "Bright yellow precipitate suspended in the beaker",
                &["Pour slowly for the best swirling effect"],
            ),
            step(
                2,
                "Recrystallize",
                "Heat and cool to grow the golden crystals",
                &[
                    "Gently heat the mixture until the precipitate dissolves",
                    "Let the beaker cool undisturbed",
                    "Watch glittering hexagonal plates rain down",
                ],
                &["Use a heat-resistant beaker and tongs"],
                "Shimmering golden crystals settling like rain",
                &["Slow cooling grows larger crystals"],
            ),
        ],
        vec![
            question(
                "What drives the formation of the yellow solid?",
                &[
                    "Evaporation of the solvent",
                    "A precipitation reaction",
                    "An acid-base reaction",
                    "Electrolysis",
                ],
                1,
                "Lead iodide is insoluble in cold water, so it precipitates when the ions meet.",
            ),
            question(
                "Why do larger crystals form when the solution cools slowly?",
                &[
                    "Ions have more time to arrange into a lattice",
                    "The water evaporates faster",
                    "The reaction becomes endothermic",
                    "Lead iodide decomposes",
                ],
                0,
                "Slow cooling lets ions settle into an ordered lattice instead of many tiny grains.",
            ),
        ],
    )
}

fn ph_rainbow() -> Experiment {
    experiment(
        "ph-rainbow",
        "pH Rainbow",
        "Create a colorful spectrum using various pH indicators and solutions.",
        ExperimentMeta::new(
            Difficulty::Beginner,
            "12 min",
            SafetyLevel::Low,
            "Acid-Base",
        )
        .with_rating(4.6)
        .with_participants(890),
        &["Universal Indicator", "Various Solutions", "Test Tubes", "pH Buffer"],
        &["pH scale", "Indicators", "Acid-base chemistry"],
        vec![
            step(
                0,
                "Line Up the Test Tubes",
                "Prepare a series of solutions from acidic to basic",
                &[
                    "Place six test tubes in a rack",
                    "Fill each with a different buffer solution",
                    "Label the tubes with their expected pH",
                ],
                &["Rinse tubes between solutions to avoid cross-contamination"],
                "Six labeled tubes spanning pH 2 to 12",
                &["Arrange the tubes in pH order before adding indicator"],
            ),
            step(
                1,
                "Add the Indicator",
                "Drop universal indicator into each tube",
                &[
                    "Add three drops of universal indicator to each tube",
                    "Swirl gently to mix",
                ],
                &[],
                "A rainbow of colors from red through violet",
                &["Hold the rack against a white background to compare colors"],
            ),
            step(
                2,
                "Read the Rainbow",
                "Match each color to its pH value",
                &[
                    "Compare each tube against the indicator color chart",
                    "Record the pH you read for each tube",
                ],
                &[],
                "Recorded pH values matching the buffer labels",
                &[],
            ),
        ],
        vec![
            question(
                "What color does universal indicator turn in a strong acid?",
                &["Red", "Green", "Blue", "Purple"],
                0,
                "Strong acids push universal indicator to the red end of its range.",
            ),
            question(
                "A solution with pH 7 is best described as:",
                &["Strongly acidic", "Neutral", "Weakly basic", "Strongly basic"],
                1,
                "pH 7 is the neutral midpoint of the scale at room temperature.",
            ),
        ],
    )
}

fn chemical_volcano() -> Experiment {
    experiment(
        "chemical-volcano",
        "Chemical Volcano",
        "Simulate a volcanic eruption using acid-base reactions with dramatic visual effects.",
        ExperimentMeta::new(
            Difficulty::Intermediate,
            "20 min",
            SafetyLevel::Medium,
            "Acid-Base",
        )
        .with_rating(4.7)
        .with_participants(1450),
        &["Sodium Bicarbonate", "Acetic Acid", "Food Coloring", "Modeling Clay"],
        &["Gas evolution", "Acid-base reactions", "Chemical energy"],
        vec![
            step(
                0,
                "Build the Cone",
                "Shape the volcano around a central chamber",
                &[
                    "Mold the clay into a cone around a small cup",
                    "Leave the cup opening clear as the crater",
                ],
                &[],
                "A stable cone with an open crater",
                &["A wide base keeps the volcano from tipping"],
            ),
            step(
                1,
                "Load the Chamber",
                "Charge the crater with base and coloring",
                &[
                    "Spoon sodium bicarbonate into the cup",
                    "Add a few drops of red food coloring",
                    "Add a squirt of dish soap for thicker lava",
                ],
                &["Keep powders away from eyes"],
                "Crater loaded and ready to erupt",
                &[],
            ),
            step(
                2,
                "Erupt",
                "Pour in the acid and observe",
                &[
                    "Pour vinegar quickly into the crater",
                    "Step back and observe the eruption",
                    "Note how long the foaming lasts",
                ],
                &["Protect surfaces - the foam stains"],
                "Foaming red lava flowing down the cone",
                &["Warm vinegar makes a faster eruption"],
            ),
        ],
        vec![
            question(
                "Which gas inflates the volcano's foam?",
                &["Oxygen", "Hydrogen", "Carbon dioxide", "Nitrogen"],
                2,
                "Bicarbonate and acetic acid react to release carbon dioxide gas.",
            ),
            question(
                "The vinegar in this reaction acts as:",
                &["A base", "An acid", "A catalyst", "An indicator"],
                1,
                "Acetic acid donates protons to the bicarbonate base.",
            ),
        ],
    )
}

fn crystal_garden() -> Experiment {
    experiment(
        "crystal-garden",
        "Crystal Garden",
        "Grow beautiful crystals using supersaturated solutions and nucleation techniques.",
        ExperimentMeta::new(
            Difficulty::Advanced,
            "45 min",
            SafetyLevel::Medium,
            "Crystallization",
        )
        .with_rating(4.5)
        .with_participants(650),
        &["Salt Solutions", "String", "Magnifying Glass", "Heat Source"],
        &["Crystallization", "Solubility", "Nucleation"],
        vec![
            step(
                0,
                "Supersaturate",
                "Dissolve as much salt as the hot water will hold",
                &[
                    "Heat water until nearly boiling",
                    "Stir in salt until no more dissolves",
                    "Remove from heat once saturated",
                ],
                &["Handle hot glassware with tongs"],
                "A clear, supersaturated solution",
                &["A pinch of extra undissolved salt confirms saturation"],
            ),
            step(
                1,
                "Seed the Garden",
                "Suspend a string to give crystals a place to grow",
                &[
                    "Tie a string to a pencil laid across the jar",
                    "Lower the string into the solution without touching the sides",
                ],
                &[],
                "String suspended mid-solution",
                &["A rough string nucleates better than a smooth one"],
            ),
            step(
                2,
                "Wait and Observe",
                "Let the solution cool and crystals form",
                &[
                    "Leave the jar undisturbed as it cools",
                    "Inspect the string with the magnifying glass",
                    "Record crystal size and shape over time",
                ],
                &[],
                "Crystals climbing the string as the solution cools",
                &["Cover the jar loosely to keep dust out"],
            ),
        ],
        vec![
            question(
                "Why must the solution be supersaturated before crystals grow?",
                &[
                    "Excess dissolved salt is forced out as the solution cools",
                    "The water must evaporate completely",
                    "Supersaturation raises the boiling point",
                    "Crystals only grow in acidic solutions",
                ],
                0,
                "Cooling a supersaturated solution leaves more salt dissolved than it can hold, so the excess crystallizes.",
            ),
            question(
                "The string in the jar serves as:",
                &["A stirrer", "A nucleation site", "A heat source", "A filter"],
                1,
                "Crystals need a surface to start growing on; the string provides nucleation sites.",
            ),
        ],
    )
}

fn color_changing_milk() -> Experiment {
    experiment(
        "color-changing-milk",
        "Color-Changing Milk",
        "Explore surface tension and polarity by creating swirling colors in milk.",
        ExperimentMeta::new(
            Difficulty::Beginner,
            "8 min",
            SafetyLevel::Low,
            "Physical Chemistry",
        )
        .with_rating(4.4)
        .with_participants(980),
        &["Whole Milk", "Food Coloring", "Dish Soap", "Cotton Swabs"],
        &["Surface tension", "Polarity", "Molecular interactions"],
        vec![
            step(
                0,
                "Pour the Canvas",
                "Set up a shallow plate of milk",
                &[
                    "Pour whole milk into a shallow plate",
                    "Let the surface settle completely",
                ],
                &[],
                "A still, even layer of milk",
                &["Whole milk works best - the fat drives the effect"],
            ),
            step(
                1,
                "Add the Colors",
                "Dot food coloring across the surface",
                &[
                    "Add single drops of several colors near the center",
                    "Do not stir",
                ],
                &[],
                "Distinct drops of color resting on the milk",
                &[],
            ),
            step(
                2,
                "Break the Tension",
                "Touch a soapy swab to the surface",
                &[
                    "Dip a cotton swab in dish soap",
                    "Touch it to the center of the plate and hold still",
                    "Watch the colors race and swirl",
                ],
                &[],
                "Colors bursting outward in swirling patterns",
                &["Try touching different spots to restart the swirls"],
            ),
        ],
        vec![
            question(
                "Why do the colors rush away when soap touches the milk?",
                &[
                    "Soap heats the milk",
                    "Soap breaks the milk's surface tension",
                    "The coloring reacts with soap",
                    "The milk curdles",
                ],
                1,
                "Soap disrupts surface tension and chases the fat, dragging the colors with it.",
            ),
            question(
                "Which property of soap molecules drives the swirling?",
                &[
                    "They are radioactive",
                    "They have polar and nonpolar ends",
                    "They are magnetic",
                    "They evaporate quickly",
                ],
                1,
                "Soap is amphiphilic: one end grabs water, the other grabs fat, setting the milk in motion.",
            ),
        ],
    )
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
