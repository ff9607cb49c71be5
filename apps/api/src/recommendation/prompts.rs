// Prompt constants for the recommendation pipeline.

/// Recommendation prompt template. Slots: {age}, {gender}, {weight}, {height},
/// {veg_or_nonveg}, {address}, {allergies}.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = "Diet Recommendation System:\n\
Please recommend 5 restaurants names, 5 breakfast names, 5 dinner names, and 5 workout names, \
based on the following criteria given below:\n\
Age: {age}\n\
Gender: {gender}\n\
Weight: {weight}\n\
Height: {height}\n\
Veg_or_Nonveg: {veg_or_nonveg}\n\
Address: {address}\n\
Food allergies: {allergies}.";

/// Appended to the template when the tagged response format is enabled.
pub const TAGGED_FORMAT_INSTRUCTION: &str = "\n\n\
Format your answer as exactly four tagged sections, in this order, one recommendation per line \
and nothing outside the tags:\n\
<restaurants>\n...\n</restaurants>\n\
<breakfast>\n...\n</breakfast>\n\
<dinner>\n...\n</dinner>\n\
<workouts>\n...\n</workouts>";
