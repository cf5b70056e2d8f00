//! Catalogue of common Italian procedural terms.
//!
//! Each entry carries its legal reference and the flags that drive the
//! calculation (suspension, free term). [`StandardTerm::request`] turns an
//! entry into a ready-to-run [`TermRequest`].

use std::collections::BTreeMap;

use tc_time::{Date, TermUnit};

use crate::term::TermRequest;

/// A named procedural term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StandardTerm {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Length of the term.
    pub amount: u32,
    /// Unit of `amount`.
    pub unit: TermUnit,
    /// Legal reference (e.g. `"325 c.p.c."`).
    pub article: &'static str,
    /// Grouping category.
    pub category: &'static str,
    /// Flagged as urgent.
    pub urgent: bool,
    /// Subject to the August suspension.
    pub suspension: bool,
    /// Free term ("termine libero").
    pub free_term: bool,
}

impl StandardTerm {
    /// Forward request for this term starting at `start`.
    pub fn request(&self, start: Date) -> TermRequest {
        TermRequest::new(start, self.unit, self.amount)
            .with_suspension(self.suspension)
            .free_term(self.free_term)
    }

    fn matches(&self, needle: &str) -> bool {
        [self.name, self.description, self.article]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Every catalogued term, in catalogue order.
pub fn all() -> &'static [StandardTerm] {
    &STANDARD_TERMS
}

/// Look up a term by id.
pub fn by_id(id: &str) -> Option<&'static StandardTerm> {
    STANDARD_TERMS.iter().find(|t| t.id == id)
}

/// Terms grouped by category, categories in lexical order.
pub fn by_category() -> BTreeMap<&'static str, Vec<&'static StandardTerm>> {
    let mut groups: BTreeMap<&'static str, Vec<&'static StandardTerm>> = BTreeMap::new();
    for term in STANDARD_TERMS.iter() {
        groups.entry(term.category).or_default().push(term);
    }
    groups
}

/// Case-insensitive search over name, description and article.
pub fn search(query: &str) -> Vec<&'static StandardTerm> {
    let needle = query.trim().to_lowercase();
    STANDARD_TERMS.iter().filter(|t| t.matches(&needle)).collect()
}

/// Terms flagged as urgent.
pub fn urgent() -> Vec<&'static StandardTerm> {
    STANDARD_TERMS.iter().filter(|t| t.urgent).collect()
}

/// Distinct categories, sorted.
pub fn categories() -> Vec<&'static str> {
    by_category().into_keys().collect()
}

static STANDARD_TERMS: [StandardTerm; 27] = [
    StandardTerm {
        id: "comparsa_conclusionale",
        name: "Comparsa conclusionale",
        description: "Termine per depositare la comparsa conclusionale",
        amount: 20,
        unit: TermUnit::Days,
        article: "183 c.p.c.",
        category: "Comparsa e Difesa",
        urgent: false,
        suspension: true,
        free_term: true,
    },
    StandardTerm {
        id: "comparsa_risposta",
        name: "Comparsa di risposta",
        description: "Termine per depositare la comparsa di risposta",
        amount: 20,
        unit: TermUnit::Days,
        article: "167 c.p.c.",
        category: "Comparsa e Difesa",
        urgent: false,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "comparsa_costituzione",
        name: "Comparsa di costituzione",
        description: "Termine per costituirsi in giudizio",
        amount: 20,
        unit: TermUnit::Days,
        article: "166 c.p.c.",
        category: "Comparsa e Difesa",
        urgent: false,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "appello_civile",
        name: "Appello civile",
        description: "Termine per proporre appello",
        amount: 30,
        unit: TermUnit::Days,
        article: "325 c.p.c.",
        category: "Impugnazioni",
        urgent: true,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "ricorso_cassazione",
        name: "Ricorso per cassazione",
        description: "Termine per proporre ricorso per cassazione",
        amount: 60,
        unit: TermUnit::Days,
        article: "366 c.p.c.",
        category: "Impugnazioni",
        urgent: true,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "opposizione_decreto",
        name: "Opposizione a decreto ingiuntivo",
        description: "Termine per opporsi al decreto ingiuntivo",
        amount: 40,
        unit: TermUnit::Days,
        article: "633 c.p.c.",
        category: "Impugnazioni",
        urgent: true,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "opposizione_esecuzione",
        name: "Opposizione a precetto",
        description: "Termine per opporsi al precetto esecutivo",
        amount: 10,
        unit: TermUnit::Days,
        article: "615 c.p.c.",
        category: "Impugnazioni",
        urgent: true,
        suspension: false,
        free_term: false,
    },
    StandardTerm {
        id: "opposizione_espropriazione",
        name: "Opposizione a pignoramento",
        description: "Termine per opporsi al pignoramento",
        amount: 10,
        unit: TermUnit::Days,
        article: "615 c.p.c.",
        category: "Impugnazioni",
        urgent: true,
        suspension: false,
        free_term: false,
    },
    StandardTerm {
        id: "opposizione_terzi",
        name: "Opposizione di terzo",
        description: "Termine per proporre opposizione di terzo",
        amount: 30,
        unit: TermUnit::Days,
        article: "615 c.p.c.",
        category: "Esecuzione",
        urgent: false,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "opposizione_crediti",
        name: "Opposizione a distribuzione",
        description: "Termine per opporsi alla distribuzione del ricavato",
        amount: 10,
        unit: TermUnit::Days,
        article: "615 c.p.c.",
        category: "Esecuzione",
        urgent: true,
        suspension: false,
        free_term: false,
    },
    StandardTerm {
        id: "ricorso_tribunale",
        name: "Ricorso al tribunale",
        description: "Termine per proporre ricorso al tribunale",
        amount: 30,
        unit: TermUnit::Days,
        article: "702 c.p.c.",
        category: "Procedimento",
        urgent: false,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "ricorso_giudice_pace",
        name: "Ricorso al giudice di pace",
        description: "Termine per proporre ricorso al giudice di pace",
        amount: 30,
        unit: TermUnit::Days,
        article: "316 c.p.c.",
        category: "Procedimento",
        urgent: false,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "ricorso_arbitrato",
        name: "Ricorso per arbitrato",
        description: "Termine per proporre ricorso per arbitrato",
        amount: 30,
        unit: TermUnit::Days,
        article: "809 c.p.c.",
        category: "Procedimento",
        urgent: false,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "notifica_atti",
        name: "Notifica di atti",
        description: "Termine per notificare atti processuali",
        amount: 5,
        unit: TermUnit::Days,
        article: "137 c.p.c.",
        category: "Notifiche",
        urgent: false,
        suspension: false,
        free_term: false,
    },
    StandardTerm {
        id: "notifica_sentenza",
        name: "Notifica di sentenza",
        description: "Termine per notificare sentenza",
        amount: 5,
        unit: TermUnit::Days,
        article: "137 c.p.c.",
        category: "Notifiche",
        urgent: false,
        suspension: false,
        free_term: false,
    },
    StandardTerm {
        id: "prova_testimoniale",
        name: "Prova testimoniale",
        description: "Termine per proporre prova testimoniale",
        amount: 10,
        unit: TermUnit::Days,
        article: "244 c.p.c.",
        category: "Prova",
        urgent: false,
        suspension: false,
        free_term: false,
    },
    StandardTerm {
        id: "prova_perizia",
        name: "Prova peritale",
        description: "Termine per proporre prova peritale",
        amount: 10,
        unit: TermUnit::Days,
        article: "244 c.p.c.",
        category: "Prova",
        urgent: false,
        suspension: false,
        free_term: false,
    },
    StandardTerm {
        id: "prova_documentale",
        name: "Prova documentale",
        description: "Termine per produrre documenti",
        amount: 10,
        unit: TermUnit::Days,
        article: "244 c.p.c.",
        category: "Prova",
        urgent: false,
        suspension: false,
        free_term: false,
    },
    StandardTerm {
        id: "reclamo_tribunale",
        name: "Reclamo al tribunale",
        description: "Termine per proporre reclamo al tribunale",
        amount: 10,
        unit: TermUnit::Days,
        article: "702 c.p.c.",
        category: "Reclami",
        urgent: true,
        suspension: false,
        free_term: false,
    },
    StandardTerm {
        id: "reclamo_cassazione",
        name: "Reclamo per cassazione",
        description: "Termine per proporre reclamo per cassazione",
        amount: 10,
        unit: TermUnit::Days,
        article: "366 c.p.c.",
        category: "Reclami",
        urgent: true,
        suspension: false,
        free_term: false,
    },
    StandardTerm {
        id: "prescrizione_breve",
        name: "Prescrizione breve",
        description: "Termine di prescrizione breve (5 anni)",
        amount: 5,
        unit: TermUnit::Years,
        article: "2946 c.c.",
        category: "Prescrizione",
        urgent: false,
        suspension: false,
        free_term: false,
    },
    StandardTerm {
        id: "prescrizione_decennale",
        name: "Prescrizione decennale",
        description: "Termine di prescrizione decennale",
        amount: 10,
        unit: TermUnit::Years,
        article: "2946 c.c.",
        category: "Prescrizione",
        urgent: false,
        suspension: false,
        free_term: false,
    },
    StandardTerm {
        id: "decadenza_contratto",
        name: "Decadenza da contratto",
        description: "Termine di decadenza da contratto",
        amount: 30,
        unit: TermUnit::Days,
        article: "2964 c.c.",
        category: "Decadenza",
        urgent: false,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "decadenza_garanzia",
        name: "Decadenza da garanzia",
        description: "Termine di decadenza da garanzia",
        amount: 30,
        unit: TermUnit::Days,
        article: "2964 c.c.",
        category: "Decadenza",
        urgent: false,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "ricorso_tar",
        name: "Ricorso al TAR",
        description: "Termine per proporre ricorso al TAR",
        amount: 60,
        unit: TermUnit::Days,
        article: "21 L. 1034/1971",
        category: "Giustizia Amministrativa",
        urgent: true,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "ricorso_consiglio_stato",
        name: "Ricorso al Consiglio di Stato",
        description: "Termine per proporre ricorso al Consiglio di Stato",
        amount: 60,
        unit: TermUnit::Days,
        article: "21 L. 1034/1971",
        category: "Giustizia Amministrativa",
        urgent: true,
        suspension: true,
        free_term: false,
    },
    StandardTerm {
        id: "ricorso_corte_appello",
        name: "Ricorso alla Corte di Appello",
        description: "Termine per proporre ricorso alla Corte di Appello",
        amount: 30,
        unit: TermUnit::Days,
        article: "325 c.p.c.",
        category: "Giustizia Amministrativa",
        urgent: true,
        suspension: true,
        free_term: false,
    },
];
