//! Static page content.
//!
//! Everything the kiosk displays is first-party clinic material, kept
//! here as data so the view code stays free of copy literals and the
//! text can be revised without touching layout.

/// Sections reachable from the navigation bar, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Worlds,
    Testimonials,
    Faq,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Worlds,
        Section::Testimonials,
        Section::Faq,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Início",
            Section::Worlds => "Mundos",
            Section::Testimonials => "Depoimentos",
            Section::Faq => "FAQ",
            Section::Contact => "Contato",
        }
    }
}

/// A themed treatment room.
#[derive(Debug, Clone, Copy)]
pub struct World {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

pub const WORLDS: [World; 4] = [
    World {
        title: "Base Galáctica",
        subtitle: "Star Wars",
        description: "Uma jornada espacial pelo cuidado dental. Cadeira temática, sons imersivos e uma experiência fora deste mundo.",
        features: ["Mesa TIE Fighter", "Projeções 3D", "Som Espacial"],
    },
    World {
        title: "Reino Encantado",
        subtitle: "Disney",
        description: "Onde os sonhos se tornam sorrisos. Ambiente mágico com princesas, bonecos e encanto em cada detalhe.",
        features: ["Princesas", "Bonecos", "Mágica Real"],
    },
    World {
        title: "Expedição Safari",
        subtitle: "Safari",
        description: "Aventura na selva odontológica. Animais, natureza e exploração com o Mickey explorador no corredor.",
        features: ["Mickey Explorador", "Natureza", "Aventura"],
    },
    World {
        title: "Arena Gamer",
        subtitle: "Gamer",
        description: "Nível avançado de diversão. Cadeiras de controle arcade, telas, games e tecnologia de ponta.",
        features: ["Controle Arcade", "RGB Lights", "VR Experience"],
    },
];

/// A parent testimonial shown in the carousel.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Ana Carolina",
        role: "Mãe do Pedro, 5 anos",
        quote: "Meu filho tinha pavor de dentista. Depois que conhecemos a Dra. Michelle e a sala Star Wars, ele não para de pedir pra voltar!",
    },
    Testimonial {
        name: "Ricardo Mendes",
        role: "Pai da Luísa, 7 anos",
        quote: "A atenção com a criança é surreal. Minha filha se sente num parque de diversões. A sala Disney é mágica!",
    },
    Testimonial {
        name: "Fernanda Costa",
        role: "Mãe dos gêmeos, 4 anos",
        quote: "Conseguir tratar dois gêmeos ao mesmo tempo sem choro foi um milagre! A abordagem faz toda diferença.",
    },
    Testimonial {
        name: "Marcelo Duarte",
        role: "Pai do João, 8 anos",
        quote: "A sala Gamer é perfeita pro meu filho. Ele fica tão concentrado no jogo que nem sente o procedimento.",
    },
    Testimonial {
        name: "Patrícia Lima",
        role: "Mãe da Sofia, 6 anos",
        quote: "Finalmente encontrei uma dentista que entende crianças autistas. A paciência fez toda diferença!",
    },
];

/// One FAQ accordion entry.
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

pub const FAQS: [FaqEntry; 8] = [
    FaqEntry {
        question: "A partir de qual idade devo levar meu filho ao dentista?",
        answer: "A recomendação da Sociedade Brasileira de Odontopediatria é que a primeira consulta ocorra aos 6 meses de idade, quando nascem os primeiros dentinhos, ou até o 1º aniversário. Quanto mais cedo, melhor! Assim prevenimos problemas e criamos uma relação de confiança com o dentista desde cedo.",
        category: "Primeira Consulta",
    },
    FaqEntry {
        question: "Vocês aceitam plano de saúde?",
        answer: "Sim! Trabalhamos com os principais planos de saúde do mercado: Amil, Bradesco, SulAmérica e Unimed. Também atendemos particulares com condições especiais de pagamento. Entre em contato para verificar se o seu plano é aceito e os procedimentos cobertos.",
        category: "Convênios",
    },
    FaqEntry {
        question: "O tratamento dói? Como vocês lidam com crianças ansiosas?",
        answer: "Nossa abordagem é 100% livre de trauma! Utilizamos anestesia computadorizada (The Wand), que é praticamente indolor, além de técnicas de relaxamento e distração. As salas temáticas ajudam muito - as crianças se divertem tanto que esquecem do tratamento. Para casos mais complexos, tenho formação em psicologia para lidar com ansiedade.",
        category: "Tratamento",
    },
    FaqEntry {
        question: "Quanto tempo dura uma consulta?",
        answer: "A primeira consulta (avaliação) dura cerca de 40-50 minutos. Consultas de acompanhamento variam de 20 a 40 minutos, dependendo do procedimento. Nunca corremos! Cada criança tem seu tempo e respeitamos isso.",
        category: "Consulta",
    },
    FaqEntry {
        question: "Preciso ir com meu filho à consulta?",
        answer: "Sim, é obrigatório a presença de um responsável legal (pai, mãe ou responsável com autorização). Além de questões de segurança, a presença do responsável ajuda a criança a se sentir mais segura e é importante para discutirmos hábitos alimentares e de higiene em casa.",
        category: "Consulta",
    },
    FaqEntry {
        question: "Vocês trabalham com ortopedia facial (aparelhos)?",
        answer: "Sim! Sou especialista em Ortopedia Funcional dos Maxilares. Trabalhamos com expansores, aparelhos removíveis e outros dispositivos para correção da respiração, mordida e desenvolvimento facial harmonioso. Começamos esse acompanhamento precoce, a partir dos 4-5 anos.",
        category: "Tratamento",
    },
    FaqEntry {
        question: "Onde fica a clínica? Tem estacionamento?",
        answer: "Ficamos no Centro Clínico do Lago, Lago Sul - um local de fácil acesso com estacionamento próprio e gratuito para pacientes. O endereço completo é: St. de Habitações Individuais Sul QI 09, Bloco E2 Sala 201.",
        category: "Localização",
    },
    FaqEntry {
        question: "Qual o horário de funcionamento?",
        answer: "Funcionamos de segunda a sexta-feira, das 08:00 às 18:00, e aos sábados das 09:00 às 13:00. Oferecemos horários flexíveis para adaptar à rotina escolar das crianças.",
        category: "Horários",
    },
];

/// A headline statistic badge.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat {
        number: "10K+",
        label: "Sorrisos",
    },
    Stat {
        number: "4",
        label: "Reinos",
    },
    Stat {
        number: "15+",
        label: "Anos",
    },
];

pub mod hero {
    pub const BADGE: &str = "Odontopediatria Premium";
    pub const TITLE_TOP: &str = "Reino Mágico";
    pub const TITLE_BOTTOM: &str = "de Sorrisos";
    pub const SUBLINE: &str = "Onde a magia Disney encontra a ciência dental. Salas temáticas imersivas que transformam a visita ao dentista em uma aventura encantada.";
    pub const CTA_PRIMARY: &str = "Iniciar Missão";
    pub const CTA_SECONDARY: &str = "Conheça os Mundos";
}

pub mod headers {
    pub const WORLDS_TITLE: &str = "Escolha Seu Mundo";
    pub const WORLDS_BADGE: &str = "4 Mundos Temáticos";
    pub const TESTIMONIALS_TITLE: &str = "O Que os Pais Dizem";
    pub const TESTIMONIALS_BADGE: &str = "Relatórios da Frota";
    pub const TESTIMONIALS_SUBLINE: &str =
        "Histórias reais de famílias que transformaram a experiência odontológica dos pequenos.";
    pub const FAQ_TITLE: &str = "Perguntas Frequentes";
    pub const FAQ_BADGE: &str = "Dúvidas Frequentes";
    pub const FAQ_OUTRO: &str = "Ainda tem dúvidas? Fale direto com a gente:";
    pub const FAQ_CTA: &str = "Falar pelo WhatsApp";
}

pub mod ticket {
    pub const BADGE: &str = "Autorizado";
    pub const TITLE: &str = "Passaporte da Missão";
    pub const SUBTITLE: &str = "O Multiverso espera por você!";
    pub const HINT: &str = "Prepare o sorriso para uma aventura inesquecível";
    pub const DESTINATION_LABEL: &str = "DESTINO";
    pub const DESTINATION: &str = "Reino dos Sorrisos";
    pub const DATE_LABEL: &str = "DATA";
    pub const DATE: &str = "A Definir";
    pub const CONFIRM: &str = "Confirmar Embarque no WhatsApp";
    pub const FOOTNOTE: &str = "Clique para abrir o WhatsApp e falar diretamente com a Base";
}

pub mod clinic {
    pub const DOCTOR: &str = "Dra. Michelle Amorim";
    pub const TAGLINE: &str = "Odontopediatria Premium";
    pub const BLURB: &str = "Transformando a experiência odontológica infantil em uma aventura mágica. Onde a ciência encontra o encanto.";
    pub const ADDRESS_VENUE: &str = "Centro Clínico do Lago";
    pub const ADDRESS_DETAIL: &str = "QI 09 Bloco E2 Sala 201 - Lago Sul, Brasília/DF";
    pub const EMAIL: &str = "contato@michelleamorim.com";
    pub const HOURS_WEEK: &str = "Seg-Sex: 08h às 18h";
    pub const HOURS_SAT: &str = "Sáb: 09h às 13h";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_labels_are_unique() {
        let labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
        let unique: std::collections::HashSet<&str> = labels.iter().copied().collect();
        assert_eq!(unique.len(), labels.len());
        assert_eq!(labels.len(), 5);
    }

    #[test]
    fn test_content_tables_are_fully_authored() {
        assert_eq!(WORLDS.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 5);
        assert_eq!(FAQS.len(), 8);

        for world in WORLDS {
            assert!(!world.title.is_empty());
            assert!(!world.description.is_empty());
            assert!(world.features.iter().all(|f| !f.is_empty()));
        }
        for t in TESTIMONIALS {
            assert!(!t.quote.is_empty());
            assert!(t.role.contains("anos"));
        }
        for faq in FAQS {
            assert!(faq.question.ends_with('?'));
            assert!(!faq.answer.is_empty());
            assert!(!faq.category.is_empty());
        }
    }

    #[test]
    fn test_first_faq_is_the_first_visit_question() {
        // The accordion opens with this entry expanded.
        assert_eq!(FAQS[0].category, "Primeira Consulta");
    }
}
