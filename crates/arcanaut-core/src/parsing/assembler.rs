use crate::extraction::PageContent;
use crate::model::{kit_id, Kit};
use crate::parsing::classify::{classify, is_noise, LineClass};
use crate::parsing::power::PowerBuffer;

/// Phrase that marks the start of the kit chapter. Matched against the
/// space-joined accumulation of all lines seen so far, so a phrase broken
/// across lines (or pages) still matches.
pub const HEADER_PHRASE: &str = "Kits de Personagem";

/// What to do with a title-shaped line that terminates a power's
/// continuation text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadingBoundary {
    /// Drop the line. Matches the book's layout, where such a line is the
    /// next kit's name and will be recovered by the backward scan instead.
    #[default]
    Discard,
    /// Keep the line as the first fragment of the next power entry.
    Reuse,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub heading_boundary: HeadingBoundary,
}

enum AssemblerState {
    /// Accumulating every line of every page until the header phrase shows
    /// up; scanning begins on the page after the one that completes it.
    AwaitingHeader { buffer: Vec<String> },
    Scanning,
}

/// Stateful kit assembler. Feed it pages in document order, then call
/// [`finish`](KitAssembler::finish) to seal the last open kit.
pub struct KitAssembler {
    state: AssemblerState,
    options: ParseOptions,
    current: Option<Kit>,
    power: PowerBuffer,
    kits: Vec<Kit>,
}

impl KitAssembler {
    pub fn new(options: ParseOptions) -> Self {
        KitAssembler {
            state: AssemblerState::AwaitingHeader { buffer: Vec::new() },
            options,
            current: None,
            power: PowerBuffer::new(),
            kits: Vec::new(),
        }
    }

    pub fn feed_page(&mut self, page: &PageContent) {
        let lines: Vec<&str> = page.lines.iter().map(|l| l.trim()).collect();

        if let AssemblerState::AwaitingHeader { buffer } = &mut self.state {
            buffer.extend(lines.iter().map(|l| l.to_string()));
            if buffer.join(" ").contains(HEADER_PHRASE) {
                self.state = AssemblerState::Scanning;
            }
            // Lines of the header page itself are never scanned.
            return;
        }

        for (i, &line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            match classify(line) {
                LineClass::Noise => continue,
                LineClass::SectionStart(rest) => {
                    self.flush_power();
                    if let Some(kit) = self.current.take() {
                        self.kits.push(kit);
                    }
                    let ordinal = self.kits.len() + 1;
                    let name = backscan_name(&lines[..i])
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| format!("Kit_{ordinal}"));
                    let categories = rest
                        .split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect();
                    self.current = Some(Kit {
                        id: kit_id(ordinal),
                        name,
                        categories,
                        requirements: Vec::new(),
                        powers: Vec::new(),
                        start_page: page.page_number,
                    });
                }
                _ if self.current.is_none() => continue,
                LineClass::Requirements(rest) => {
                    let reqs = rest
                        .split([',', ';'])
                        .map(|t| t.trim_matches(|c: char| c.is_whitespace() || c == '.'))
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect();
                    if let Some(kit) = self.current.as_mut() {
                        // last one wins if the line repeats
                        kit.requirements = reqs;
                    }
                }
                LineClass::Bullet(rest) => {
                    self.flush_power();
                    self.power.push(rest);
                }
                LineClass::Heading if !self.power.is_empty() => {
                    self.flush_power();
                    if self.options.heading_boundary == HeadingBoundary::Reuse {
                        self.power.push(line);
                    }
                }
                LineClass::Continuation if !self.power.is_empty() => {
                    self.power.push(line);
                }
                // heading with nothing buffered, or stray continuation text
                // with no open power entry
                _ => continue,
            }
        }
    }

    /// Seal the last open kit and return the completed sequence.
    pub fn finish(mut self) -> Vec<Kit> {
        self.flush_power();
        if let Some(kit) = self.current.take() {
            self.kits.push(kit);
        }
        self.kits
    }

    fn flush_power(&mut self) {
        if let Some(power) = self.power.flush() {
            if let Some(kit) = self.current.as_mut() {
                kit.powers.push(power);
            }
        }
    }
}

/// Scan backward through the lines preceding a section marker on the same
/// page and return the nearest non-empty, non-noise line: the kit's name.
/// The scan never crosses a page boundary; a name printed at the bottom of
/// the previous page is not found and the caller falls back to `Kit_<n>`.
fn backscan_name<'a>(preceding: &[&'a str]) -> Option<&'a str> {
    preceding
        .iter()
        .rev()
        .copied()
        .find(|l| !l.is_empty() && !is_noise(l))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize, lines: &[&str]) -> PageContent {
        PageContent {
            page_number: number,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn run(pages: &[PageContent], options: ParseOptions) -> Vec<Kit> {
        let mut asm = KitAssembler::new(options);
        for p in pages {
            asm.feed_page(p);
        }
        asm.finish()
    }

    #[test]
    fn test_nothing_before_header_phrase() {
        let kits = run(
            &[page(
                1,
                &["Núcleos. Combate", "• Golpe. Ataque.", "Kits de Personagem"],
            )],
            ParseOptions::default(),
        );
        // marker lines on the header page itself are discarded
        assert!(kits.is_empty());
    }

    #[test]
    fn test_header_phrase_split_across_lines() {
        let kits = run(
            &[
                page(1, &["Capítulo Três", "Kits de", "Personagem"]),
                page(2, &["Fulano", "Núcleos. Magia"]),
            ],
            ParseOptions::default(),
        );
        assert_eq!(kits.len(), 1);
        assert_eq!(kits[0].name, "Fulano");
        assert_eq!(kits[0].start_page, 2);
    }

    #[test]
    fn test_backscan_skips_noise_lines() {
        let kits = run(
            &[
                page(1, &["Kits de Personagem"]),
                page(2, &["Guardião da Chama", "MAGIA", "17", "Núcleos. Magia, Fogo"]),
            ],
            ParseOptions::default(),
        );
        assert_eq!(kits[0].name, "Guardião da Chama");
        assert_eq!(kits[0].categories, vec!["Magia", "Fogo"]);
    }

    #[test]
    fn test_backscan_does_not_cross_pages() {
        let kits = run(
            &[
                page(1, &["Kits de Personagem"]),
                page(2, &["texto qualquer", "Nome No Fim Da Página"]),
                page(3, &["Núcleos. Sombra"]),
            ],
            ParseOptions::default(),
        );
        // name on page 2 is invisible to the scan on page 3
        assert_eq!(kits[0].name, "Kit_1");
        assert_eq!(kits[0].start_page, 3);
    }

    #[test]
    fn test_requirements_trim_and_drop_empties() {
        let kits = run(
            &[
                page(1, &["Kits de Personagem"]),
                page(
                    2,
                    &["Fulano", "Núcleos. Combate", "Exigências. Força 3; Magia 2.; ;"],
                ),
            ],
            ParseOptions::default(),
        );
        assert_eq!(kits[0].requirements, vec!["Força 3", "Magia 2"]);
    }

    #[test]
    fn test_requirements_absent_means_empty() {
        let kits = run(
            &[
                page(1, &["Kits de Personagem"]),
                page(2, &["Fulano", "Núcleos. Combate"]),
            ],
            ParseOptions::default(),
        );
        assert!(kits[0].requirements.is_empty());
    }

    #[test]
    fn test_powers_with_wrapped_description() {
        let kits = run(
            &[
                page(1, &["Kits de Personagem"]),
                page(
                    2,
                    &[
                        "Fulano",
                        "Núcleos. Combate",
                        "• Golpe. Ataque forte",
                        "que ignora armadura.",
                        "• Escudo. Defesa.",
                    ],
                ),
            ],
            ParseOptions::default(),
        );
        let powers = &kits[0].powers;
        assert_eq!(powers.len(), 2);
        assert_eq!(powers[0].name, "Golpe");
        assert_eq!(powers[0].description, "Ataque forte que ignora armadura.");
        assert_eq!(powers[1].name, "Escudo");
    }

    #[test]
    fn test_heading_flushes_pending_power_and_is_discarded() {
        let kits = run(
            &[
                page(1, &["Kits de Personagem"]),
                page(
                    2,
                    &[
                        "Fulano",
                        "Núcleos. Combate",
                        "• Golpe. Ataque forte.",
                        "Próximo Título",
                        "texto solto depois do título",
                    ],
                ),
            ],
            ParseOptions::default(),
        );
        let powers = &kits[0].powers;
        assert_eq!(powers.len(), 1);
        // neither the heading nor the stray continuation leaked into content
        assert_eq!(powers[0].description, "Ataque forte.");
    }

    #[test]
    fn test_heading_boundary_reuse_seeds_next_power() {
        let kits = run(
            &[
                page(1, &["Kits de Personagem"]),
                page(
                    2,
                    &[
                        "Fulano",
                        "Núcleos. Combate",
                        "• Golpe. Ataque forte.",
                        "Fúria Cega",
                        "entra em fúria e ganha bônus.",
                    ],
                ),
            ],
            ParseOptions {
                heading_boundary: HeadingBoundary::Reuse,
            },
        );
        let powers = &kits[0].powers;
        assert_eq!(powers.len(), 2);
        // the reused heading joins the following text; the first period is
        // at the very end, so the whole sentence becomes the name
        assert_eq!(powers[1].name, "Fúria Cega entra em fúria e ganha bônus");
        assert_eq!(powers[1].description, "");
    }

    #[test]
    fn test_section_start_seals_previous_kit() {
        let kits = run(
            &[
                page(1, &["Kits de Personagem"]),
                page(
                    2,
                    &[
                        "Primeiro",
                        "Núcleos. Combate",
                        "• Golpe. Ataque.",
                        "Segundo",
                        "Núcleos. Magia",
                    ],
                ),
            ],
            ParseOptions::default(),
        );
        assert_eq!(kits.len(), 2);
        assert_eq!(kits[0].id, "kit_001");
        assert_eq!(kits[0].name, "Primeiro");
        assert_eq!(kits[0].powers.len(), 1);
        assert_eq!(kits[1].id, "kit_002");
        assert_eq!(kits[1].name, "Segundo");
    }

    #[test]
    fn test_continuation_without_open_power_is_dropped() {
        let kits = run(
            &[
                page(1, &["Kits de Personagem"]),
                page(
                    2,
                    &[
                        "Fulano",
                        "Núcleos. Combate",
                        "texto introdutório sem bala.",
                        "• Golpe. Ataque.",
                    ],
                ),
            ],
            ParseOptions::default(),
        );
        assert_eq!(kits[0].powers.len(), 1);
        assert_eq!(kits[0].powers[0].name, "Golpe");
    }

    #[test]
    fn test_end_of_input_flushes_and_seals() {
        let kits = run(
            &[
                page(1, &["Kits de Personagem"]),
                page(2, &["Fulano", "Núcleos. Combate", "• Golpe. Ataque", "inacabado"]),
            ],
            ParseOptions::default(),
        );
        assert_eq!(kits.len(), 1);
        assert_eq!(kits[0].powers.len(), 1);
        assert_eq!(kits[0].powers[0].description, "Ataque inacabado");
    }
}
