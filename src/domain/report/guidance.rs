//! Fixed self-care guidance per category.

use serde::Serialize;

use crate::domain::catalog::Category;

/// An over-the-counter medication suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Medication {
    pub name: &'static str,
    pub purpose: &'static str,
}

const fn med(name: &'static str, purpose: &'static str) -> Medication {
    Medication { name, purpose }
}

/// Recommendations and medications attached to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guidance {
    pub recommendations: &'static [&'static str],
    pub medications: &'static [Medication],
}

const STOMACH: Guidance = Guidance {
    recommendations: &[
        "Stay hydrated with small sips of water",
        "Eat bland foods (BRAT diet: Bananas, Rice, Applesauce, Toast)",
        "Avoid dairy, caffeine, and fatty foods",
        "Rest and avoid strenuous activities",
    ],
    medications: &[
        med("Antacids (Tums, Mylanta)", "For acid reflux or indigestion"),
        med("Bismuth subsalicylate (Pepto-Bismol)", "For general stomach upset"),
        med("Simethicone (Gas-X)", "For gas and bloating"),
    ],
};

const HEADACHE: Guidance = Guidance {
    recommendations: &[
        "Rest in a quiet, dark room",
        "Apply cold compress to forehead",
        "Stay hydrated",
        "Practice relaxation techniques",
        "Maintain regular sleep schedule",
    ],
    medications: &[
        med("Acetaminophen (Tylenol)", "For mild to moderate pain"),
        med("Ibuprofen (Advil, Motrin)", "For inflammation and pain"),
        med("Aspirin", "For tension headaches"),
    ],
};

const FEVER: Guidance = Guidance {
    recommendations: &[
        "Rest and get plenty of sleep",
        "Stay hydrated with water and electrolyte drinks",
        "Use cool compresses",
        "Wear light clothing",
        "Monitor temperature regularly",
    ],
    medications: &[
        med("Acetaminophen (Tylenol)", "To reduce fever"),
        med("Ibuprofen (Advil, Motrin)", "To reduce fever and body aches"),
    ],
};

const COUGH: Guidance = Guidance {
    recommendations: &[
        "Stay hydrated to thin mucus",
        "Use a humidifier",
        "Gargle with warm salt water",
        "Avoid irritants like smoke",
        "Elevate head while sleeping",
    ],
    medications: &[
        med("Dextromethorphan (Robitussin)", "For dry cough"),
        med("Guaifenesin (Mucinex)", "For productive cough"),
        med("Throat lozenges", "For throat irritation"),
    ],
};

impl Guidance {
    pub fn for_category(category: Category) -> Guidance {
        match category {
            Category::Stomach => STOMACH,
            Category::Headache => HEADACHE,
            Category::Fever => FEVER,
            Category::Cough => COUGH,
        }
    }
}
