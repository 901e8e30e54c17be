//! Static prefix tables
//!
//! Fragments are grouped into areas by the two-letter prefix of their code.
//! Unknown prefixes go to the generic "Other Area" bucket with the default
//! icon and colour.

/// Known two-letter area prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AreaCode {
    AT,
    CI,
    DI,
    EA,
    EB,
    ED,
    EO,
    ES,
    ID,
    IS,
    MC,
    MT,
    PD,
    PG,
    PP,
    PS,
    RA,
    RJ,
    RP,
    SC,
    SI,
    SP,
    ST,
    TC,
    TM,
    TP,
    UI,
    UM,
    VO,
    XT,
}

/// Display data for an area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const OTHER_AREA: AreaInfo = AreaInfo {
    id: "area-other",
    name: "Other Area",
    description: "Disciplines without a known area prefix",
};

pub const DEFAULT_AREA_ICON: &str = "📚";
pub const DEFAULT_AREA_COLOR: &str = "#6b7280";

impl AreaCode {
    pub const ALL: [AreaCode; 30] = [
        Self::AT, Self::CI, Self::DI, Self::EA, Self::EB, Self::ED, Self::EO, Self::ES,
        Self::ID, Self::IS, Self::MC, Self::MT, Self::PD, Self::PG, Self::PP, Self::PS,
        Self::RA, Self::RJ, Self::RP, Self::SC, Self::SI, Self::SP, Self::ST, Self::TC,
        Self::TM, Self::TP, Self::UI, Self::UM, Self::VO, Self::XT,
    ];

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        let prefix = prefix.trim().to_uppercase();
        Self::ALL.into_iter().find(|code| code.as_str() == prefix)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AT => "AT",
            Self::CI => "CI",
            Self::DI => "DI",
            Self::EA => "EA",
            Self::EB => "EB",
            Self::ED => "ED",
            Self::EO => "EO",
            Self::ES => "ES",
            Self::ID => "ID",
            Self::IS => "IS",
            Self::MC => "MC",
            Self::MT => "MT",
            Self::PD => "PD",
            Self::PG => "PG",
            Self::PP => "PP",
            Self::PS => "PS",
            Self::RA => "RA",
            Self::RJ => "RJ",
            Self::RP => "RP",
            Self::SC => "SC",
            Self::SI => "SI",
            Self::SP => "SP",
            Self::ST => "ST",
            Self::TC => "TC",
            Self::TM => "TM",
            Self::TP => "TP",
            Self::UI => "UI",
            Self::UM => "UM",
            Self::VO => "VO",
            Self::XT => "XT",
        }
    }

    pub fn info(&self) -> AreaInfo {
        let (id, name, description) = match self {
            Self::AT => ("area-at", "Matemática", "Cálculo, álgebra, análise e geometria"),
            Self::CI => ("area-ci", "Computação Científica", "Matemática computacional"),
            Self::DI => ("area-di", "Engenharia de Infraestrutura", "Estruturas, concreto e obras civis"),
            Self::EA => ("area-ea", "Engenharia Aeronáutica", "Colóquios em engenharia aeronáutica e aeroespacial"),
            Self::EB => ("area-eb", "Ciências Térmicas", "Termodinâmica, fluidos e transferência de calor"),
            Self::ED => ("area-ed", "Estatística e Decisão", "Probabilidade, estatística, gestão e aerodinâmica"),
            Self::EO => ("area-eo", "Engenharia Geotécnica", "Geologia, fundações e pavimentos"),
            Self::ES => ("area-es", "Fundamentos de Computação", "Introdução à computação, algoritmos e estruturas de dados"),
            Self::ID => ("area-id", "Recursos Hídricos e Ambiente", "Hidráulica, hidrologia e saneamento"),
            Self::IS => ("area-is", "Física e Sistemas", "Mecânica, eletromagnetismo, física moderna e engenharia de sistemas"),
            Self::MC => ("area-mc", "Ciência de Dados", "Análise de dados, computação gráfica e simulação"),
            Self::MT => ("area-mt", "Máquinas de Fluxo", "Turbinas, motores e turbobombas"),
            Self::PD => ("area-pd", "Dinâmica de Máquinas", "Vibrações e estruturas inteligentes"),
            Self::PG => ("area-pg", "Desenho Técnico", "Desenho técnico e assistido por computador"),
            Self::PP => ("area-pp", "Projeto Mecânico", "Elementos de máquinas, análise estrutural e manutenção"),
            Self::PS => ("area-ps", "Sistemas e Controle", "Sinais, sistemas dinâmicos e mecatrônica"),
            Self::RA => ("area-ra", "Transporte Aéreo", "Aeroportos, operações e economia aplicada"),
            Self::RJ => ("area-rj", "Projeto Aeroespacial", "Projeto de aeronaves e sistemas aeroespaciais"),
            Self::RP => ("area-rp", "Propulsão", "Propulsão aeronáutica e motores foguete"),
            Self::SC => ("area-sc", "Sistemas de Computação", "Sistemas operacionais, redes e segurança"),
            Self::SI => ("area-si", "Sistemas de Informação", "Engenharia de software e bancos de dados"),
            Self::SP => ("area-sp", "Sistemas Espaciais", "Ambiente espacial, integração e navegação"),
            Self::ST => ("area-st", "Estruturas Aeroespaciais", "Mecânica dos sólidos e aeroelasticidade"),
            Self::TC => ("area-tc", "Teoria da Computação", "Algoritmos, complexidade, linguagens formais e criptografia"),
            Self::TM => ("area-tm", "Materiais", "Engenharia e seleção de materiais"),
            Self::TP => ("area-tp", "Processos de Fabricação", "Fabricação, soldagem e sustentabilidade"),
            Self::UI => ("area-ui", "Química", "Química geral e eletroquímica"),
            Self::UM => ("area-um", "Humanidades", "Filosofia, direito, história e sociedade"),
            Self::VO => ("area-vo", "Mecânica do Voo", "Desempenho, estabilidade, controle e mecânica orbital"),
            Self::XT => ("area-xt", "Extensão", "Extensão em STEM"),
        };
        AreaInfo { id, name, description }
    }

    /// `ID` has no icon of its own
    pub fn icon(&self) -> Option<&'static str> {
        Some(match self {
            Self::AT => "📐",
            Self::CI => "💻",
            Self::DI => "🏗️",
            Self::EA => "✈️",
            Self::EB => "⚙️",
            Self::ED => "📊",
            Self::EO => "🏔️",
            Self::ES => "🔧",
            Self::IS => "🔬",
            Self::MC => "📈",
            Self::MT => "🔧",
            Self::PD => "📋",
            Self::PG => "📐",
            Self::PP => "🏭",
            Self::PS => "🔄",
            Self::RA => "🛫",
            Self::RJ => "🚀",
            Self::RP => "⚡",
            Self::SC => "💻",
            Self::SI => "🌐",
            Self::SP => "🛰️",
            Self::ST => "🏗️",
            Self::TC => "🧮",
            Self::TM => "🔬",
            Self::TP => "⚙️",
            Self::UI => "🧪",
            Self::UM => "📖",
            Self::VO => "✈️",
            Self::XT => "🎓",
            Self::ID => return None,
        })
    }

    /// `ID` has no colour of its own
    pub fn color(&self) -> Option<&'static str> {
        Some(match self {
            Self::AT | Self::RP => "#ef4444",
            Self::CI | Self::RJ | Self::VO => "#3b82f6",
            Self::DI | Self::ST => "#10b981",
            Self::EA | Self::RA => "#8b5cf6",
            Self::EB | Self::PS | Self::SP => "#f59e0b",
            Self::ED | Self::PP | Self::XT => "#14b8a6",
            Self::EO | Self::SC => "#22c55e",
            Self::ES | Self::SI => "#06b6d4",
            Self::IS | Self::TC => "#f97316",
            Self::MC | Self::UI => "#ec4899",
            Self::MT | Self::TM => "#84cc16",
            Self::PD | Self::TP => "#6366f1",
            Self::PG | Self::UM => "#a855f7",
            Self::ID => return None,
        })
    }
}

/// Area for a prefix, or the generic bucket
pub fn area_for_prefix(prefix: &str) -> AreaInfo {
    AreaCode::from_prefix(prefix)
        .map(|code| code.info())
        .unwrap_or(OTHER_AREA)
}

pub fn area_icon(prefix: &str) -> &'static str {
    AreaCode::from_prefix(prefix)
        .and_then(|code| code.icon())
        .unwrap_or(DEFAULT_AREA_ICON)
}

pub fn area_color(prefix: &str) -> &'static str {
    AreaCode::from_prefix(prefix)
        .and_then(|code| code.color())
        .unwrap_or(DEFAULT_AREA_COLOR)
}

// =============================================================================
// Discipline families
// =============================================================================

/// Discipline-family prefixes used when formatting assembled disciplines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisciplineFamily {
    CSI,
    MAT,
    CMC,
    CTC,
    ELE,
    FIS,
    QUI,
    ED,
    IS,
    UM,
}

pub const DEFAULT_DISCIPLINE_ICON: &str = "📚";
pub const DEFAULT_DISCIPLINE_COLOR: &str = "#6366f1";

impl DisciplineFamily {
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Some(match prefix {
            "CSI" => Self::CSI,
            "MAT" => Self::MAT,
            "CMC" => Self::CMC,
            "CTC" => Self::CTC,
            "ELE" => Self::ELE,
            "FIS" => Self::FIS,
            "QUI" => Self::QUI,
            "ED" => Self::ED,
            "IS" => Self::IS,
            "UM" => Self::UM,
            _ => return None,
        })
    }

    /// Family prefix of a namespaced discipline id: the text before the
    /// first `-`, after its last `.`.
    pub fn prefix_of(discipline_id: &str) -> &str {
        let head = discipline_id.split('-').next().unwrap_or(discipline_id);
        head.rsplit('.').next().unwrap_or(head)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::CSI => "💻",
            Self::MAT => "📐",
            Self::CMC => "🧮",
            Self::CTC => "⚙️",
            Self::ELE => "⚡",
            Self::FIS => "🔬",
            Self::QUI => "🧪",
            Self::ED => "📊",
            Self::IS => "🔭",
            Self::UM => "📖",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::CSI => "#00d4ff",
            Self::MAT => "#ff6b6b",
            Self::CMC => "#4ecdc4",
            Self::CTC => "#a855f7",
            Self::ELE => "#fbbf24",
            Self::FIS => "#22c55e",
            Self::QUI => "#f472b6",
            Self::ED => "#06b6d4",
            Self::IS => "#8b5cf6",
            Self::UM => "#ec4899",
        }
    }
}

pub fn discipline_icon(discipline_id: &str) -> &'static str {
    DisciplineFamily::from_prefix(DisciplineFamily::prefix_of(discipline_id))
        .map(|f| f.icon())
        .unwrap_or(DEFAULT_DISCIPLINE_ICON)
}

pub fn discipline_color(discipline_id: &str) -> &'static str {
    DisciplineFamily::from_prefix(DisciplineFamily::prefix_of(discipline_id))
        .map(|f| f.color())
        .unwrap_or(DEFAULT_DISCIPLINE_COLOR)
}
