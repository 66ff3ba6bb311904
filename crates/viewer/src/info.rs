use catalog::{CatalogError, ElectionCatalog};

/// One party's line on a results card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyLine {
    pub party: String,
    pub color_css: String,
    pub seats: u32,
}

/// Pure result-card data; rendering to any surface happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoCard {
    pub title: String,
    /// `None` for the national aggregate card.
    pub province: Option<String>,
    pub lines: Vec<PartyLine>,
}

/// Precomputed result cards for every election and province.
///
/// National cards list every party of the totals row, zeros included;
/// province cards list only parties that won seats there. Elections whose
/// slot never loaded simply have no cards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InfoBoard {
    national: Vec<Option<InfoCard>>,
    provincial: Vec<Vec<InfoCard>>,
}

impl InfoBoard {
    pub fn build(catalog: &ElectionCatalog) -> Result<Self, CatalogError> {
        let count = catalog.election_count();
        let mut national = vec![None; count];
        let mut provincial = vec![Vec::new(); count];

        for index in catalog.loaded_elections() {
            let record = catalog.election(index)?;
            let label = catalog.label(index)?;

            let mut lines = Vec::new();
            for (party, &seats) in record.totals.seats.iter().enumerate() {
                lines.push(PartyLine {
                    party: record.party_name(party).unwrap_or_default().to_string(),
                    color_css: catalog.color(index, party)?.css(),
                    seats,
                });
            }
            national[index] = Some(InfoCard {
                title: format!("Resultados Generales - Elecciones de {label}"),
                province: None,
                lines,
            });

            let mut cards = Vec::with_capacity(record.results.len());
            for row in &record.results {
                let mut lines = Vec::new();
                for (party, &seats) in row.seats.iter().enumerate() {
                    if seats == 0 {
                        continue;
                    }
                    lines.push(PartyLine {
                        party: record.party_name(party).unwrap_or_default().to_string(),
                        color_css: catalog.color(index, party)?.css(),
                        seats,
                    });
                }
                cards.push(InfoCard {
                    title: format!(
                        "Resultados de la provincia de {} - Elecciones de {label}",
                        row.province
                    ),
                    province: Some(row.province.clone()),
                    lines,
                });
            }
            provincial[index] = cards;
        }

        Ok(Self {
            national,
            provincial,
        })
    }

    pub fn national(&self, election: usize) -> Option<&InfoCard> {
        self.national.get(election).and_then(|c| c.as_ref())
    }

    /// Card for a province within one election, looked up by name identity.
    pub fn provincial(&self, election: usize, province: &str) -> Option<&InfoCard> {
        self.provincial
            .get(election)?
            .iter()
            .find(|card| card.province.as_deref() == Some(province))
    }
}

/// Project a card onto plain terminal text.
pub fn render_text(card: &InfoCard) -> String {
    let mut out = card.title.clone();
    for line in &card.lines {
        out.push('\n');
        out.push_str(&format!("  {} - {}", line.party, line.seats));
    }
    out
}
