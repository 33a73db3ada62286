use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const ALL_CATEGORIES_LABEL: &str = "الكل";
pub const DEFAULT_TEAM1_NAME: &str = "الفريق الأول";
pub const DEFAULT_TEAM2_NAME: &str = "الفريق الثاني";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub points: u32,
}

impl Answer {
    pub fn new(text: &str, points: u32) -> Self {
        Answer {
            text: text.to_string(),
            points,
        }
    }
}

/// Catalog id. Older catalogs carry fractional ids (a millisecond timestamp
/// plus a random fraction); those keep their exact bits so they write back
/// unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuestionId {
    Int(i64),
    Fractional(u64),
}

impl QuestionId {
    pub fn fractional(value: f64) -> Self {
        QuestionId::Fractional(value.to_bits())
    }

    /// Largest whole number not above the id.
    pub fn floor(self) -> i64 {
        match self {
            QuestionId::Int(id) => id,
            QuestionId::Fractional(bits) => f64::from_bits(bits).floor() as i64,
        }
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        QuestionId::Int(id)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Int(id) => write!(f, "{}", id),
            QuestionId::Fractional(bits) => write!(f, "{}", f64::from_bits(*bits)),
        }
    }
}

impl Serialize for QuestionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            QuestionId::Int(id) => serializer.serialize_i64(id),
            QuestionId::Fractional(bits) => serializer.serialize_f64(f64::from_bits(bits)),
        }
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        if let Some(id) = number.as_i64() {
            return Ok(QuestionId::Int(id));
        }
        match number.as_f64() {
            Some(value)
                if value.fract() == 0.0
                    && value >= i64::MIN as f64
                    && value < i64::MAX as f64 =>
            {
                Ok(QuestionId::Int(value as i64))
            }
            Some(value) if value.is_finite() => Ok(QuestionId::fractional(value)),
            _ => Err(de::Error::custom(format!("invalid question id: {}", number))),
        }
    }
}

/// A catalog entry. `answers` is in reveal order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub category: Category,
    pub answers: Vec<Answer>,
}

/// A question that has not been given an id yet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub category: Category,
    pub answers: Vec<Answer>,
}

impl NewQuestion {
    pub fn with_id(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            category: self.category,
            answers: self.answers,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Category {
    GeneralKnowledge,
    Sports,
    MoviesAndSeries,
    FoodAndDrink,
    PlacesAndCities,
    HouseholdItems,
    Animals,
    Technology,
    FamousPeople,
    CustomsAndTraditions,
    Education,
    Entertainment,
    History,
    Geography,
    JobsAndProfessions,
    /// A label outside the fixed set, kept verbatim so it survives a rewrite.
    Unknown(String),
}

impl Category {
    pub const KNOWN: [Category; 15] = [
        Category::GeneralKnowledge,
        Category::Sports,
        Category::MoviesAndSeries,
        Category::FoodAndDrink,
        Category::PlacesAndCities,
        Category::HouseholdItems,
        Category::Animals,
        Category::Technology,
        Category::FamousPeople,
        Category::CustomsAndTraditions,
        Category::Education,
        Category::Entertainment,
        Category::History,
        Category::Geography,
        Category::JobsAndProfessions,
    ];

    pub fn label(&self) -> &str {
        match self {
            Category::GeneralKnowledge => "ثقافة عامة",
            Category::Sports => "رياضة",
            Category::MoviesAndSeries => "أفلام ومسلسلات",
            Category::FoodAndDrink => "طعام وشراب",
            Category::PlacesAndCities => "أماكن ومدن",
            Category::HouseholdItems => "أشياء في المنزل",
            Category::Animals => "حيوانات",
            Category::Technology => "تكنولوجيا",
            Category::FamousPeople => "شخصيات مشهورة",
            Category::CustomsAndTraditions => "عادات وتقاليد",
            Category::Education => "تعليم",
            Category::Entertainment => "ترفيه",
            Category::History => "تاريخ",
            Category::Geography => "جغرافيا",
            Category::JobsAndProfessions => "وظائف ومهن",
            Category::Unknown(label) => label.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unknown(_))
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::KNOWN
            .iter()
            .find(|category| category.label() == label)
            .cloned()
            .unwrap_or_else(|| Category::Unknown(label.to_string()))
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from(label.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unknown(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &question.category == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        if label == ALL_CATEGORIES_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::from(label))
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Team1,
    Team2,
}

impl Team {
    pub fn other(self) -> Team {
        match self {
            Team::Team1 => Team::Team2,
            Team::Team2 => Team::Team1,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TeamNames {
    pub team1: String,
    pub team2: String,
}

impl TeamNames {
    pub fn new(team1: &str, team2: &str) -> Self {
        TeamNames {
            team1: team1.to_string(),
            team2: team2.to_string(),
        }
    }

    pub fn name(&self, team: Team) -> &str {
        match team {
            Team::Team1 => &self.team1,
            Team::Team2 => &self.team2,
        }
    }
}

impl Default for TeamNames {
    fn default() -> Self {
        TeamNames::new(DEFAULT_TEAM1_NAME, DEFAULT_TEAM2_NAME)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeamScores {
    pub team1: u32,
    pub team2: u32,
}

impl TeamScores {
    pub fn get(&self, team: Team) -> u32 {
        match team {
            Team::Team1 => self.team1,
            Team::Team2 => self.team2,
        }
    }

    pub fn add(&mut self, team: Team, points: u32) {
        let slot = match team {
            Team::Team1 => &mut self.team1,
            Team::Team2 => &mut self.team2,
        };
        *slot = slot.saturating_add(points);
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(try_from = "u32", into = "u32")]
pub enum Multiplier {
    #[default]
    Single,
    Double,
}

impl Multiplier {
    pub fn factor(self) -> u32 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
        }
    }

    pub fn apply(self, points: u32) -> u32 {
        points.saturating_mul(self.factor())
    }
}

impl TryFrom<u32> for Multiplier {
    type Error = String;

    fn try_from(factor: u32) -> Result<Self, Self::Error> {
        match factor {
            1 => Ok(Multiplier::Single),
            2 => Ok(Multiplier::Double),
            other => Err(format!("unsupported multiplier: {}", other)),
        }
    }
}

impl From<Multiplier> for u32 {
    fn from(multiplier: Multiplier) -> Self {
        multiplier.factor()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SpeedQuestion {
    pub question: String,
    pub answer: String,
    pub points: u32,
}

pub fn sum_points(question: &Question, indices: impl IntoIterator<Item = usize>) -> u32 {
    indices
        .into_iter()
        .filter_map(|index| question.answers.get(index))
        .fold(0u32, |sum, answer| sum.saturating_add(answer.points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_its_label() {
        for category in Category::KNOWN.iter() {
            assert_eq!(&Category::from(category.label()), category);
        }
        let json = serde_json::to_string(&Category::Sports).unwrap();
        assert_eq!(json, "\"رياضة\"");
    }

    #[test]
    fn unknown_category_keeps_its_label() {
        let category: Category = serde_json::from_str("\"فضاء\"").unwrap();
        assert_eq!(category, Category::Unknown("فضاء".to_string()));
        assert!(!category.is_known());
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"فضاء\"");
    }

    #[test]
    fn all_label_parses_to_all_filter() {
        assert_eq!(CategoryFilter::from("الكل"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("تاريخ"),
            CategoryFilter::Only(Category::History)
        );
    }

    #[test]
    fn multiplier_rejects_other_factors() {
        assert_eq!(Multiplier::try_from(2), Ok(Multiplier::Double));
        assert!(Multiplier::try_from(3).is_err());
        assert!(serde_json::from_str::<Multiplier>("0").is_err());
        assert_eq!(Multiplier::Double.apply(115), 230);
    }

    #[test]
    fn teams_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Team::Team1).unwrap(), "\"team1\"");
        assert_eq!(Team::Team2.other(), Team::Team1);
    }

    #[test]
    fn sum_skips_out_of_range_indices() {
        let question = Question {
            id: QuestionId::Int(1),
            question: "q".to_string(),
            category: Category::Sports,
            answers: vec![Answer::new("a", 10), Answer::new("b", 5)],
        };
        assert_eq!(sum_points(&question, vec![0, 1, 7]), 15);
    }

    #[test]
    fn fractional_ids_load_and_write_back_unchanged() {
        let id: QuestionId = serde_json::from_str("1712345678901.45").unwrap();
        assert_eq!(id, QuestionId::fractional(1712345678901.45));
        assert_eq!(id.floor(), 1712345678901);
        let written = serde_json::to_string(&id).unwrap();
        assert_eq!(serde_json::from_str::<QuestionId>(&written).unwrap(), id);

        let quarter: QuestionId = serde_json::from_str("1712345678901.25").unwrap();
        assert_eq!(serde_json::to_string(&quarter).unwrap(), "1712345678901.25");
    }

    #[test]
    fn whole_ids_stay_integers() {
        let int: QuestionId = serde_json::from_str("42").unwrap();
        let whole_float: QuestionId = serde_json::from_str("42.0").unwrap();
        assert_eq!(int, QuestionId::Int(42));
        assert_eq!(whole_float, QuestionId::Int(42));
        assert_eq!(serde_json::to_string(&int).unwrap(), "42");
        assert!(serde_json::from_str::<QuestionId>("\"7\"").is_err());
    }
}
