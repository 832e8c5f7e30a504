use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::Locale;

type MessageIndex = HashMap<&'static str, &'static str>;

const CATALOG_ES: &[(&str, &str)] = &[
    ("Library Catalog", "Catálogo de la biblioteca"),
    ("Public Library Catalog", "Catálogo de la biblioteca pública"),
    (
        "Browse our collection of books. Check availability, due dates, and find your next read.",
        "Explora nuestra colección de libros. Consulta la disponibilidad, las fechas de devolución y encuentra tu próxima lectura.",
    ),
    ("Total Books", "Total de libros"),
    ("Available", "Disponible"),
    ("Checked Out", "Prestado"),
    ("Genres", "Géneros"),
    ("All", "Todos"),
    ("Search by title or author...", "Buscar por título o autor..."),
    ("Search", "Buscar"),
    ("Pages", "Páginas"),
    ("Copies", "Ejemplares"),
    ("Published", "Publicado"),
    ("ISBN", "ISBN"),
    ("Due: {date}", "Devolución: {date}"),
    ("No books found matching your search.", "No se encontraron libros que coincidan con tu búsqueda."),
    (
        "This is an example application built to demonstrate internationalization. Book data is fictional.",
        "Esta es una aplicación de ejemplo creada para demostrar la internacionalización. Los datos de los libros son ficticios.",
    ),
    ("Back to catalog", "Volver al catálogo"),
    ("Branch Information", "Información de la sucursal"),
    ("Location", "Ubicación"),
    ("Shelf", "Estante"),
    ("Place a Hold", "Reservar"),
    (
        "This book is currently available. Reserve a copy to pick up at your preferred branch.",
        "Este libro está disponible. Reserva un ejemplar para recogerlo en tu sucursal preferida.",
    ),
    ("Reserve This Book", "Reservar este libro"),
    ("Join Waitlist", "Unirse a la lista de espera"),
    (
        "All copies are currently checked out. Join the waitlist to be notified when a copy becomes available.",
        "Todos los ejemplares están prestados. Únete a la lista de espera para recibir un aviso cuando haya uno disponible.",
    ),
    ("Similar Titles", "Títulos similares"),
    ("Page not found", "Página no encontrada"),
    ("The page you requested does not exist.", "La página que buscas no existe."),
    ("Language", "Idioma"),
    ("Fiction", "Ficción"),
    ("Science", "Ciencia"),
    ("History", "Historia"),
    ("Philosophy", "Filosofía"),
    ("Main Street Branch", "Sucursal Main Street"),
    ("Riverside Branch", "Sucursal Riverside"),
    ("Hillside Branch", "Sucursal Hillside"),
    ("Fiction, Row A, Shelf 3", "Ficción, fila A, estante 3"),
    ("Fiction, Row A, Shelf 5", "Ficción, fila A, estante 5"),
    ("Science, Row B, Shelf 7", "Ciencia, fila B, estante 7"),
    ("Science, Row B, Shelf 9", "Ciencia, fila B, estante 9"),
    ("History, Row C, Shelf 2", "Historia, fila C, estante 2"),
    ("Philosophy, Row D, Shelf 1", "Filosofía, fila D, estante 1"),
    ("500 BC", "500 a. C."),
    (
        "A portrait of the Jazz Age in all of its decadence and excess, Gatsby captured the spirit of the author's generation and earned itself a permanent place in American mythology. Self-made, self-invented millionaire Jay Gatsby embodies some of Fitzgerald's ideals of romance, richness, and youth. Here, he pursues a distant dream embodied in a single green light across the water.",
        "Un retrato de la era del jazz en toda su decadencia y exceso, Gatsby capturó el espíritu de la generación del autor y se ganó un lugar permanente en la mitología estadounidense. El millonario hecho a sí mismo Jay Gatsby encarna algunos de los ideales de Fitzgerald sobre el romance, la riqueza y la juventud. Aquí persigue un sueño lejano encarnado en una única luz verde al otro lado del agua.",
    ),
    (
        "Stephen Hawking attempts to explain a range of subjects in cosmology, including the Big Bang, black holes, and light cones, to the nonspecialist reader. The book explores fundamental questions about the universe: where it came from, where it is going, and how it will end.",
        "Stephen Hawking intenta explicar al lector no especializado diversos temas de cosmología, como el Big Bang, los agujeros negros y los conos de luz. El libro explora preguntas fundamentales sobre el universo: de dónde vino, hacia dónde va y cómo terminará.",
    ),
    (
        "The unforgettable novel of a childhood in a sleepy Southern town and the crisis of conscience that rocked it. Through the young eyes of Scout and Jem Finch, Harper Lee explores with exuberant humour the irrationality of adult attitudes to race and class in the Deep South of the 1930s.",
        "La inolvidable novela de una infancia en un tranquilo pueblo del Sur y de la crisis de conciencia que lo sacudió. A través de los ojos de Scout y Jem Finch, Harper Lee explora con exuberante humor la irracionalidad de las actitudes adultas hacia la raza y la clase en el Sur profundo de la década de 1930.",
    ),
    (
        "In this bold and provocative book, Yuval Noah Harari explores the ways in which biology and history have defined us, and enhanced our understanding of what it means to be human. From examining the role of evolving humans in the ecosystem to charting the rise of empires, Sapiens integrates history and science.",
        "En este libro audaz y provocador, Yuval Noah Harari explora cómo la biología y la historia nos han definido y han ampliado nuestra comprensión de lo que significa ser humano. Desde el papel de los humanos en el ecosistema hasta el auge de los imperios, Sapiens integra historia y ciencia.",
    ),
    (
        "Written in the fifth century BC, The Art of War is a military treatise that has long transcended its original purpose. Its lessons on strategy, tactics, and leadership have been adopted by business leaders, politicians, and anyone facing competitive challenges. Sun Tzu offers timeless principles of conflict and negotiation.",
        "Escrito en el siglo V a. C., El arte de la guerra es un tratado militar que hace tiempo trascendió su propósito original. Sus lecciones sobre estrategia, táctica y liderazgo han sido adoptadas por líderes empresariales, políticos y cualquiera que enfrente desafíos competitivos. Sun Tzu ofrece principios atemporales sobre el conflicto y la negociación.",
    ),
    (
        "Cosmos traces the origins of knowledge and the scientific method, mixing science and philosophy, and speculates to the future of science. The book covers a broad range of topics, including the origin of life, the human brain, Egyptian hieroglyphics, spacecraft missions, the death of the Sun, the evolution of galaxies, and more.",
        "Cosmos recorre los orígenes del conocimiento y del método científico, mezclando ciencia y filosofía, y especula sobre el futuro de la ciencia. El libro abarca una amplia gama de temas, como el origen de la vida, el cerebro humano, los jeroglíficos egipcios, las misiones espaciales, la muerte del Sol, la evolución de las galaxias y mucho más.",
    ),
];

const CATALOG_FR: &[(&str, &str)] = &[
    ("Library Catalog", "Catalogue de la bibliothèque"),
    ("Public Library Catalog", "Catalogue de la bibliothèque publique"),
    (
        "Browse our collection of books. Check availability, due dates, and find your next read.",
        "Parcourez notre collection de livres. Vérifiez la disponibilité, les dates de retour et trouvez votre prochaine lecture.",
    ),
    ("Total Books", "Nombre de livres"),
    ("Available", "Disponible"),
    ("Checked Out", "Emprunté"),
    ("Genres", "Genres"),
    ("All", "Tous"),
    ("Search by title or author...", "Rechercher par titre ou auteur..."),
    ("Search", "Rechercher"),
    ("Pages", "Pages"),
    ("Copies", "Exemplaires"),
    ("Published", "Publié"),
    ("ISBN", "ISBN"),
    ("Due: {date}", "Retour prévu : {date}"),
    ("No books found matching your search.", "Aucun livre ne correspond à votre recherche."),
    (
        "This is an example application built to demonstrate internationalization. Book data is fictional.",
        "Ceci est une application d'exemple conçue pour illustrer l'internationalisation. Les données des livres sont fictives.",
    ),
    ("Back to catalog", "Retour au catalogue"),
    ("Branch Information", "Informations sur l'annexe"),
    ("Location", "Emplacement"),
    ("Shelf", "Étagère"),
    ("Place a Hold", "Réserver"),
    (
        "This book is currently available. Reserve a copy to pick up at your preferred branch.",
        "Ce livre est actuellement disponible. Réservez un exemplaire à retirer dans l'annexe de votre choix.",
    ),
    ("Reserve This Book", "Réserver ce livre"),
    ("Join Waitlist", "Rejoindre la liste d'attente"),
    (
        "All copies are currently checked out. Join the waitlist to be notified when a copy becomes available.",
        "Tous les exemplaires sont empruntés. Rejoignez la liste d'attente pour être prévenu dès qu'un exemplaire est disponible.",
    ),
    ("Similar Titles", "Titres similaires"),
    ("Page not found", "Page introuvable"),
    ("The page you requested does not exist.", "La page demandée n'existe pas."),
    ("Language", "Langue"),
    ("Fiction", "Fiction"),
    ("Science", "Sciences"),
    ("History", "Histoire"),
    ("Philosophy", "Philosophie"),
    ("Main Street Branch", "Annexe Main Street"),
    ("Riverside Branch", "Annexe Riverside"),
    ("Hillside Branch", "Annexe Hillside"),
    ("Fiction, Row A, Shelf 3", "Fiction, rangée A, étagère 3"),
    ("Fiction, Row A, Shelf 5", "Fiction, rangée A, étagère 5"),
    ("Science, Row B, Shelf 7", "Sciences, rangée B, étagère 7"),
    ("Science, Row B, Shelf 9", "Sciences, rangée B, étagère 9"),
    ("History, Row C, Shelf 2", "Histoire, rangée C, étagère 2"),
    ("Philosophy, Row D, Shelf 1", "Philosophie, rangée D, étagère 1"),
    ("500 BC", "500 av. J.-C."),
    (
        "A portrait of the Jazz Age in all of its decadence and excess, Gatsby captured the spirit of the author's generation and earned itself a permanent place in American mythology. Self-made, self-invented millionaire Jay Gatsby embodies some of Fitzgerald's ideals of romance, richness, and youth. Here, he pursues a distant dream embodied in a single green light across the water.",
        "Portrait de l'ère du jazz dans toute sa décadence et ses excès, Gatsby a saisi l'esprit de la génération de l'auteur et s'est fait une place durable dans la mythologie américaine. Millionnaire parti de rien, Jay Gatsby incarne certains idéaux de Fitzgerald : l'amour, la richesse et la jeunesse. Il poursuit ici un rêve lointain incarné par une simple lumière verte de l'autre côté de l'eau.",
    ),
    (
        "Stephen Hawking attempts to explain a range of subjects in cosmology, including the Big Bang, black holes, and light cones, to the nonspecialist reader. The book explores fundamental questions about the universe: where it came from, where it is going, and how it will end.",
        "Stephen Hawking tente d'expliquer au lecteur non spécialiste plusieurs sujets de cosmologie, dont le Big Bang, les trous noirs et les cônes de lumière. Le livre explore des questions fondamentales sur l'univers : d'où il vient, où il va et comment il finira.",
    ),
    (
        "The unforgettable novel of a childhood in a sleepy Southern town and the crisis of conscience that rocked it. Through the young eyes of Scout and Jem Finch, Harper Lee explores with exuberant humour the irrationality of adult attitudes to race and class in the Deep South of the 1930s.",
        "L'inoubliable roman d'une enfance dans une petite ville endormie du Sud et de la crise de conscience qui l'a ébranlée. À travers le regard de Scout et Jem Finch, Harper Lee explore avec un humour exubérant l'irrationalité des adultes face à la race et à la classe dans le Sud profond des années 1930.",
    ),
    (
        "In this bold and provocative book, Yuval Noah Harari explores the ways in which biology and history have defined us, and enhanced our understanding of what it means to be human. From examining the role of evolving humans in the ecosystem to charting the rise of empires, Sapiens integrates history and science.",
        "Dans ce livre audacieux et provocateur, Yuval Noah Harari explore la façon dont la biologie et l'histoire nous ont définis et ont enrichi notre compréhension de ce que signifie être humain. Du rôle des humains dans l'écosystème à l'essor des empires, Sapiens mêle histoire et science.",
    ),
    (
        "Written in the fifth century BC, The Art of War is a military treatise that has long transcended its original purpose. Its lessons on strategy, tactics, and leadership have been adopted by business leaders, politicians, and anyone facing competitive challenges. Sun Tzu offers timeless principles of conflict and negotiation.",
        "Écrit au Ve siècle av. J.-C., L'Art de la guerre est un traité militaire qui a depuis longtemps dépassé son objet initial. Ses leçons de stratégie, de tactique et de leadership ont été adoptées par des dirigeants d'entreprise, des responsables politiques et tous ceux qui font face à la concurrence. Sun Tzu propose des principes intemporels sur le conflit et la négociation.",
    ),
    (
        "Cosmos traces the origins of knowledge and the scientific method, mixing science and philosophy, and speculates to the future of science. The book covers a broad range of topics, including the origin of life, the human brain, Egyptian hieroglyphics, spacecraft missions, the death of the Sun, the evolution of galaxies, and more.",
        "Cosmos retrace les origines du savoir et de la méthode scientifique, mêlant science et philosophie, et s'interroge sur l'avenir de la science. Le livre couvre un large éventail de sujets, dont l'origine de la vie, le cerveau humain, les hiéroglyphes égyptiens, les missions spatiales, la mort du Soleil, l'évolution des galaxies, et bien plus encore.",
    ),
];

static INDEXES: Lazy<HashMap<Locale, MessageIndex>> = Lazy::new(|| {
    let indexes: HashMap<Locale, MessageIndex> = [
        (Locale::En, MessageIndex::new()),
        (Locale::Es, CATALOG_ES.iter().copied().collect()),
        (Locale::Fr, CATALOG_FR.iter().copied().collect()),
    ]
    .into_iter()
    .collect();

    tracing::debug!(
        target: "catalog-i18n",
        locales = indexes.len(),
        "message catalogs indexed"
    );
    indexes
});

/// Translates English source strings into one locale.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    locale: Locale,
    messages: &'static MessageIndex,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        static EMPTY: Lazy<MessageIndex> = Lazy::new(MessageIndex::new);

        let messages = INDEXES.get(&locale).unwrap_or(&*EMPTY);
        Self { locale, messages }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the translation of `source`, or `source` itself when this
    /// locale has no entry for it.
    pub fn gt(&self, source: &str) -> String {
        self.lookup(source).unwrap_or(source).to_string()
    }

    /// Returns the translation of `source` if this locale has one.
    pub fn lookup(&self, source: &str) -> Option<&'static str> {
        self.messages.get(source).copied()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
