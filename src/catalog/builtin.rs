//! The navigation table shipped with the documentation set.
//!
//! Order matters: sections render in the order listed, and the order of
//! entries decides both page order and the order in which categories first
//! appear inside a section.

use crate::catalog::identity::{EntryId, SectionId};
use crate::catalog::model::{Catalog, Entry, Section};
use std::sync::OnceLock;

pub const DESIGN_PATTERNS: &str = "design-patterns";
pub const JS_FUNDAMENTALS: &str = "js-fundamentals";

struct SectionDef {
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    description: &'static str,
    color: &'static str,
    gradient: &'static str,
}

struct EntryDef {
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    file: &'static str,
    category: Option<&'static str>,
    section: Option<&'static str>,
}

const fn design(
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    file: &'static str,
    category: &'static str,
) -> EntryDef {
    EntryDef {
        id,
        title,
        icon,
        file,
        category: Some(category),
        section: Some(DESIGN_PATTERNS),
    }
}

const fn js(
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    file: &'static str,
    category: &'static str,
) -> EntryDef {
    EntryDef {
        id,
        title,
        icon,
        file,
        category: Some(category),
        section: Some(JS_FUNDAMENTALS),
    }
}

const SECTIONS: &[SectionDef] = &[
    SectionDef {
        id: DESIGN_PATTERNS,
        title: "Design Patterns",
        icon: "🏗️",
        description: "Reusable solutions to recurring design problems, from object creation to application architecture.",
        color: "#6366f1",
        gradient: "linear-gradient(135deg, #6366f1 0%, #8b5cf6 100%)",
    },
    SectionDef {
        id: JS_FUNDAMENTALS,
        title: "JavaScript Fundamentals",
        icon: "⚡",
        description: "Core language concepts: scope, functions, objects, asynchronous code, and the DOM.",
        color: "#f59e0b",
        gradient: "linear-gradient(135deg, #f59e0b 0%, #ef4444 100%)",
    },
];

const ENTRIES: &[EntryDef] = &[
    EntryDef {
        id: "overview",
        title: "Overview",
        icon: "📚",
        file: "README.md",
        category: None,
        section: None,
    },
    // Design patterns
    design("singleton", "Singleton", "1️⃣", "patterns/singleton.md", "Creational Patterns"),
    design("factory", "Factory Method", "🏭", "patterns/factory.md", "Creational Patterns"),
    design("abstract-factory", "Abstract Factory", "🧱", "patterns/abstract-factory.md", "Creational Patterns"),
    design("builder", "Builder", "🔨", "patterns/builder.md", "Creational Patterns"),
    design("prototype", "Prototype", "🧬", "patterns/prototype.md", "Creational Patterns"),
    design("adapter", "Adapter", "🔌", "patterns/adapter.md", "Structural Patterns"),
    design("decorator", "Decorator", "🎀", "patterns/decorator.md", "Structural Patterns"),
    design("facade", "Facade", "🏛️", "patterns/facade.md", "Structural Patterns"),
    design("proxy", "Proxy", "🛡️", "patterns/proxy.md", "Structural Patterns"),
    design("composite", "Composite", "🌳", "patterns/composite.md", "Structural Patterns"),
    design("observer", "Observer", "👀", "patterns/observer.md", "Behavioral Patterns"),
    design("strategy", "Strategy", "♟️", "patterns/strategy.md", "Behavioral Patterns"),
    design("command", "Command", "🎮", "patterns/command.md", "Behavioral Patterns"),
    design("iterator", "Iterator", "🔁", "patterns/iterator.md", "Behavioral Patterns"),
    design("mediator", "Mediator", "🤝", "patterns/mediator.md", "Behavioral Patterns"),
    design("state", "State", "🚦", "patterns/state.md", "Behavioral Patterns"),
    design("module", "Module", "📦", "patterns/module.md", "Architectural Patterns"),
    design("mvc", "Model-View-Controller", "🧩", "patterns/mvc.md", "Architectural Patterns"),
    design("pub-sub", "Publish/Subscribe", "📡", "patterns/pub-sub.md", "Architectural Patterns"),
    // JavaScript fundamentals
    js("js-introduction", "Introduction to JavaScript", "👋", "javascript/introduction.md", "JavaScript Basics"),
    js("variables", "Variables", "📝", "javascript/variables.md", "JavaScript Basics"),
    js("data-types", "Data Types", "🔤", "javascript/data-types.md", "JavaScript Basics"),
    js("operators", "Operators", "➕", "javascript/operators.md", "JavaScript Basics"),
    js("scope", "Scope", "🔭", "javascript/scope.md", "Fundamentals"),
    js("hoisting", "Hoisting", "🏋️", "javascript/hoisting.md", "Fundamentals"),
    js("type-coercion", "Type Coercion", "🔄", "javascript/type-coercion.md", "Fundamentals"),
    js("equality", "Equality", "⚖️", "javascript/equality.md", "Fundamentals"),
    js("functions", "Functions", "🔧", "javascript/functions.md", "Functions"),
    js("arrow-functions", "Arrow Functions", "➡️", "javascript/arrow-functions.md", "Functions"),
    js("closures", "Closures", "🔒", "javascript/closures.md", "Functions"),
    js("this-keyword", "The this Keyword", "👉", "javascript/this-keyword.md", "Functions"),
    js("higher-order-functions", "Higher-Order Functions", "🎯", "javascript/higher-order-functions.md", "Functions"),
    js("objects", "Objects", "🗂️", "javascript/objects.md", "Objects & Arrays"),
    js("arrays", "Arrays", "📋", "javascript/arrays.md", "Objects & Arrays"),
    js("prototypes", "Prototypes", "🧪", "javascript/prototypes.md", "Objects & Arrays"),
    js("classes", "Classes", "🏷️", "javascript/classes.md", "Objects & Arrays"),
    js("conditionals", "Conditionals", "🔀", "javascript/conditionals.md", "Control Flow"),
    js("loops", "Loops", "🔁", "javascript/loops.md", "Control Flow"),
    js("error-handling", "Error Handling", "🚨", "javascript/error-handling.md", "Control Flow"),
    js("destructuring", "Destructuring", "🧩", "javascript/destructuring.md", "Modern JavaScript"),
    js("spread-rest", "Spread and Rest", "🌊", "javascript/spread-rest.md", "Modern JavaScript"),
    js("template-literals", "Template Literals", "💬", "javascript/template-literals.md", "Modern JavaScript"),
    js("es-modules", "ES Modules", "📦", "javascript/es-modules.md", "Modern JavaScript"),
    js("callbacks", "Callbacks", "📞", "javascript/callbacks.md", "Async JavaScript"),
    js("promises", "Promises", "🤞", "javascript/promises.md", "Async JavaScript"),
    js("async-await", "Async/Await", "⏳", "javascript/async-await.md", "Async JavaScript"),
    js("event-loop", "Event Loop", "🌀", "javascript/event-loop.md", "Async JavaScript"),
    js("dom-selection", "Selecting Elements", "🎯", "javascript/dom-selection.md", "DOM Manipulation"),
    js("dom-events", "Events", "🖱️", "javascript/dom-events.md", "DOM Manipulation"),
    js("dom-traversal", "Traversing the DOM", "🧭", "javascript/dom-traversal.md", "DOM Manipulation"),
];

impl SectionDef {
    fn to_section(&self) -> Section {
        Section {
            id: SectionId::from(self.id),
            title: self.title.to_string(),
            icon: self.icon.to_string(),
            description: self.description.to_string(),
            color: self.color.to_string(),
            gradient: self.gradient.to_string(),
        }
    }
}

impl EntryDef {
    fn to_entry(&self) -> Entry {
        Entry {
            id: EntryId::from(self.id),
            title: self.title.to_string(),
            icon: self.icon.to_string(),
            file: self.file.to_string(),
            category: self.category.map(str::to_string),
            section: self.section.map(SectionId::from),
        }
    }
}

impl Catalog {
    /// The shipped catalog, materialized on first use and shared afterwards.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Catalog::new(
                SECTIONS.iter().map(SectionDef::to_section).collect(),
                ENTRIES.iter().map(EntryDef::to_entry).collect(),
            )
        })
    }
}
