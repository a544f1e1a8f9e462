//! Slash-command definitions
//!
//! Described without platform types; the Discord adapter turns them into
//! registration payloads at startup.

use horacio_core::entities::Character;

pub const FICHA: &str = "ficha";
pub const CRIAR_PERSONAGEM: &str = "criar-personagem";
pub const EDITAR_PERSONAGEM: &str = "editar-personagem";
pub const EXCLUIR_PERSONAGEM: &str = "excluir-personagem";

/// Option names shared by the commands
pub mod options {
    pub const PERSONAGEM: &str = "personagem";
    pub const NOME: &str = "nome";
    pub const DESCRICAO: &str = "descricao";
    pub const SISTEMA: &str = "sistema";
    pub const NIVEL: &str = "nivel";
    pub const PUBLICO: &str = "publico";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub required: bool,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

impl OptionDefinition {
    const fn new(name: &'static str, description: &'static str, kind: OptionKind) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
            min_value: None,
            max_value: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn range(mut self, min: i64, max: i64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<OptionDefinition>,
}

fn level_option() -> OptionDefinition {
    OptionDefinition::new(options::NIVEL, "Nível do personagem (1-20)", OptionKind::Integer).range(
        i64::from(Character::MIN_LEVEL),
        i64::from(Character::MAX_LEVEL),
    )
}

/// Every command the bot registers
pub fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            name: FICHA,
            description: "🎭 Visualiza a ficha de um personagem",
            options: vec![OptionDefinition::new(
                options::PERSONAGEM,
                "Nome ou ID do personagem",
                OptionKind::String,
            )],
        },
        CommandDefinition {
            name: CRIAR_PERSONAGEM,
            description: "✨ Cria um novo personagem",
            options: vec![
                OptionDefinition::new(options::NOME, "Nome do personagem", OptionKind::String)
                    .required(),
                OptionDefinition::new(options::DESCRICAO, "Biografia do personagem", OptionKind::String),
                OptionDefinition::new(options::SISTEMA, "Sistema de regras (d20, d100)", OptionKind::String),
                level_option(),
                OptionDefinition::new(options::PUBLICO, "Ficha visível para outros", OptionKind::Boolean),
            ],
        },
        CommandDefinition {
            name: EDITAR_PERSONAGEM,
            description: "✏️ Edita um personagem existente",
            options: vec![
                OptionDefinition::new(options::PERSONAGEM, "Nome ou ID do personagem", OptionKind::String)
                    .required(),
                OptionDefinition::new(options::NOME, "Novo nome", OptionKind::String),
                OptionDefinition::new(options::DESCRICAO, "Nova biografia", OptionKind::String),
                level_option(),
                OptionDefinition::new(options::PUBLICO, "Ficha visível para outros", OptionKind::Boolean),
            ],
        },
        CommandDefinition {
            name: EXCLUIR_PERSONAGEM,
            description: "🗑️ Remove um personagem",
            options: vec![OptionDefinition::new(
                options::PERSONAGEM,
                "Nome ou ID do personagem",
                OptionKind::String,
            )
            .required()],
        },
    ]
}
