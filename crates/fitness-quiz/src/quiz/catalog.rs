use serde::Serialize;
use std::sync::OnceLock;

pub const CATALOG_VERSION: &str = "2025.1";

/// Fixed tag vocabulary shared by catalog entries and scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Advanced,
    Balance,
    BeginnerFriendly,
    Cardio,
    Challenging,
    Coordination,
    Core,
    Energy,
    Flexibility,
    FullBody,
    Fun,
    HighEnergy,
    HighIntensity,
    Intermediate,
    LowImpact,
    Mindfulness,
    Morning,
    MuscleGain,
    Premium,
    Recovery,
    Specialized,
    Stability,
    Strength,
    StressRelief,
    TimeEfficient,
    Toning,
    Variety,
    WeightLoss,
    Yoga,
}

impl Tag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Advanced => "advanced",
            Self::Balance => "balance",
            Self::BeginnerFriendly => "beginner_friendly",
            Self::Cardio => "cardio",
            Self::Challenging => "challenging",
            Self::Coordination => "coordination",
            Self::Core => "core",
            Self::Energy => "energy",
            Self::Flexibility => "flexibility",
            Self::FullBody => "full_body",
            Self::Fun => "fun",
            Self::HighEnergy => "high_energy",
            Self::HighIntensity => "high_intensity",
            Self::Intermediate => "intermediate",
            Self::LowImpact => "low_impact",
            Self::Mindfulness => "mindfulness",
            Self::Morning => "morning",
            Self::MuscleGain => "muscle_gain",
            Self::Premium => "premium",
            Self::Recovery => "recovery",
            Self::Specialized => "specialized",
            Self::Stability => "stability",
            Self::Strength => "strength",
            Self::StressRelief => "stress_relief",
            Self::TimeEfficient => "time_efficient",
            Self::Toning => "toning",
            Self::Variety => "variety",
            Self::WeightLoss => "weight_loss",
            Self::Yoga => "yoga",
        }
    }
}

/// One class offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [Tag],
}

impl CatalogEntry {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Read-only class table. Entry order is significant: it breaks score ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    version: &'static str,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(version: &'static str, entries: Vec<CatalogEntry>) -> Self {
        Self { version, entries }
    }

    /// The built-in class schedule, built once per process.
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(|| Catalog::new(CATALOG_VERSION, STANDARD_CLASSES.to_vec()))
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use Tag::*;

const STANDARD_CLASSES: [CatalogEntry; 22] = [
    CatalogEntry {
        id: "align_flow_yoga",
        name: "ALIGN & FLOW YOGA",
        description: "This peaceful yoga practice will help you unlock new levels of flexibility, coordination, balance, and strength. Ideal for active recovery from stress and muscle soreness. All levels welcome.",
        tags: &[Flexibility, Recovery, Mindfulness, BeginnerFriendly],
    },
    CatalogEntry {
        id: "body_sculpt",
        name: "BODY SCULPT",
        description: "Get a total body workout using your body weight, dumbbells, and bands to tone from head to toe.",
        tags: &[Strength, Toning, FullBody, BeginnerFriendly],
    },
    CatalogEntry {
        id: "belly_dance",
        name: "BELLY DANCE",
        description: "Learn the basic movements of Belly Dance (hip isolations, lifts, drops, and circles). Suitable for all levels! Beginners welcome!",
        tags: &[Fun, Coordination, BeginnerFriendly, LowImpact],
    },
    CatalogEntry {
        id: "cardio_crush",
        name: "CARDIO CRUSH",
        description: "A mixed-impact, pure cardio workout combining different types of cardio (Circuit Training, Hip Hop Step, Kickbox, Latin Dance, and more).",
        tags: &[Cardio, HighEnergy, Variety, WeightLoss],
    },
    CatalogEntry {
        id: "core_n_more",
        name: "CORE N' MORE",
        description: "Strengthen stability muscles and improve definition for the superficial core muscles.",
        tags: &[Core, Strength, Stability, BeginnerFriendly],
    },
    CatalogEntry {
        id: "cycling_plus",
        name: "CYCLING PLUS",
        description: "A challenging full-body workout combining cycling and strength exercises.",
        tags: &[Cardio, Strength, HighIntensity, FullBody],
    },
    CatalogEntry {
        id: "dynamic_pilates",
        name: "DYNAMIC PILATES",
        description: "Address the body's natural balance through controlled movements, focusing on core muscles in the waist and lower back area.",
        tags: &[Flexibility, Core, Balance, Mindfulness, BeginnerFriendly],
    },
    CatalogEntry {
        id: "hiit_cycle",
        name: "H.I.I.T. CYCLE",
        description: "Indoor cycling class with short bursts of maximum intensity effort, interspersed with short rest periods.",
        tags: &[Cardio, HighIntensity, WeightLoss, Advanced],
    },
    CatalogEntry {
        id: "hirt",
        name: "H.I.R.T.",
        description: "High-intensity strength training involves performing strength exercises with maximum effort and short rest periods.",
        tags: &[Strength, HighIntensity, MuscleGain, Advanced],
    },
    CatalogEntry {
        id: "lunchtime_yoga",
        name: "LUNCHTIME YOGA",
        description: "Join us for lunch! A one-hour vinyasa yoga class for those with limited time. Leave refreshed, renewed and ready to take on the rest of your day.",
        tags: &[Flexibility, TimeEfficient, StressRelief, BeginnerFriendly],
    },
    CatalogEntry {
        id: "mat_pilates",
        name: "MAT PILATES",
        description: "A conditioning system designed to strengthen your core and back while toning your legs, hips, back, chest, and arms.",
        tags: &[Flexibility, Strength, Toning, BeginnerFriendly],
    },
    CatalogEntry {
        id: "power_up",
        name: "POWER UP",
        description: "Combines strength training and core conditioning for a full body workout.",
        tags: &[Strength, Core, FullBody, Intermediate],
    },
    CatalogEntry {
        id: "power_yoga",
        name: "POWER YOGA",
        description: "Take yoga to the next level in this intense workout which combines popular yoga disciplines. Recommended for yoga practitioners who are ready for a new challenge.",
        tags: &[Flexibility, Strength, Advanced, Challenging],
    },
    CatalogEntry {
        id: "reformer_pilates",
        name: "REFORMER PILATES",
        description: "A Pilates session using special equipment with springs for assistance and resistance to help build muscle strength and length. Beginners welcome. *Additional charge required.",
        tags: &[Flexibility, Strength, BeginnerFriendly, Premium],
    },
    CatalogEntry {
        id: "ride_sculpt",
        name: "RIDE & SCULPT",
        description: "A low-impact class combining cycling drills with strength exercises focusing on the upper body, lower body, and core.",
        tags: &[Cardio, Strength, LowImpact, FullBody],
    },
    CatalogEntry {
        id: "strong_start",
        name: "STRONG START",
        description: "A strength training class using body weight, dumbbells and resistance bands. Start the day strong with this workout.",
        tags: &[Strength, Morning, BeginnerFriendly, FullBody],
    },
    CatalogEntry {
        id: "step_it_up",
        name: "STEP IT UP",
        description: "A cardio fusion workout with step platform (Dance, Kickbox, Core and more).",
        tags: &[Cardio, Coordination, Variety, Intermediate],
    },
    CatalogEntry {
        id: "sunrise_yoga",
        name: "SUNRISE YOGA",
        description: "A flowing series of yoga poses designed to physically and mentally awaken your body and mind at the start of the day.",
        tags: &[Flexibility, Morning, Mindfulness, BeginnerFriendly],
    },
    CatalogEntry {
        id: "total_body",
        name: "TOTAL BODY",
        description: "A complete workout alternating muscle-toning movements with intervals of cardio exercises using equipment like steps, medicine balls, and bands.",
        tags: &[Strength, Cardio, FullBody, WeightLoss, Intermediate],
    },
    CatalogEntry {
        id: "wake_up_yoga",
        name: "WAKE UP YOGA",
        description: "A Vinyasa session to energize your mornings, invigorating your body, mind, and spirit. Suitable for all levels.",
        tags: &[Flexibility, Morning, Energy, BeginnerFriendly],
    },
    CatalogEntry {
        id: "wind_down_yoga",
        name: "WIND DOWN YOGA",
        description: "Unwind from your day with easy yet challenging sequences that prepare you for ultimate relaxation.",
        tags: &[Flexibility, StressRelief, Recovery, BeginnerFriendly],
    },
    CatalogEntry {
        id: "xtreme_bootcamp",
        name: "X-TREME BOOT CAMP",
        description: "Stacks exercises one after another for the ultimate fitness challenge.",
        tags: &[HighIntensity, Challenging, Advanced, FullBody],
    },
];
