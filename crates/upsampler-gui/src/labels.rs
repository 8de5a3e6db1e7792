use upsampler_core::settings::Language;

/// Every user-visible string, per language.
pub struct Labels {
    pub app_title: &'static str,
    pub menu_file: &'static str,
    pub menu_view: &'static str,
    pub menu_edit: &'static str,
    pub menu_help: &'static str,
    pub load: &'static str,
    pub save: &'static str,
    pub save_all: &'static str,
    pub process: &'static str,
    pub import_settings: &'static str,
    pub export_settings: &'static str,
    pub preferences: &'static str,
    pub reset_defaults: &'static str,
    pub quit: &'static str,
    pub about: &'static str,
    pub about_tagline: &'static str,
    pub close: &'static str,
    pub ok: &'static str,
    pub section_file: &'static str,
    pub section_size: &'static str,
    pub section_view: &'static str,
    pub scale_factor: &'static str,
    pub width: &'static str,
    pub height: &'static str,
    pub background: &'static str,
    pub always_on_top: &'static str,
    pub load_mode: &'static str,
    pub sync_mode: &'static str,
    pub input_errors: &'static str,
    pub success_toast: &'static str,
    pub toast_duration: &'static str,
    pub scale_step: &'static str,
    pub min_step_scale: &'static str,
    pub language: &'static str,
    pub placeholder: &'static str,
    pub drop_hint: &'static str,
    pub error_title: &'static str,
    pub success_title: &'static str,
    pub invalid_input: &'static str,
    pub save_failed: &'static str,
    pub load_failed: &'static str,
    pub saved_one: &'static str,
    pub saved_many: &'static str,
    pub zoom: &'static str,
    pub preview: &'static str,
    pub output: &'static str,
}

const ENGLISH: Labels = Labels {
    app_title: "Nearest Neighbor Upsampler",
    menu_file: "File",
    menu_view: "View",
    menu_edit: "Edit",
    menu_help: "Help",
    load: "Load Image...",
    save: "Save Image",
    save_all: "Save All Images",
    process: "Process Image",
    import_settings: "Import Settings...",
    export_settings: "Export Settings...",
    preferences: "Preferences",
    reset_defaults: "Reset Defaults",
    quit: "Quit",
    about: "About",
    about_tagline: "Nearest-neighbor image scaling",
    close: "Close",
    ok: "OK",
    section_file: "Image",
    section_size: "Output Size",
    section_view: "Canvas",
    scale_factor: "Scale Factor:",
    width: "Width:",
    height: "Height:",
    background: "Canvas BG Color",
    always_on_top: "Always on Top",
    load_mode: "Loading",
    sync_mode: "Apply Fields",
    input_errors: "Invalid Input",
    success_toast: "Brief save notice",
    toast_duration: "Notice (ms)",
    scale_step: "Arrow Step",
    min_step_scale: "Arrow Minimum",
    language: "Language",
    placeholder: "Load or drop an image to begin",
    drop_hint: "Drop images to load",
    error_title: "Error",
    success_title: "Success",
    invalid_input: "Invalid value. Please enter a valid number.",
    save_failed: "Error saving images",
    load_failed: "Error loading images",
    saved_one: "Image saved successfully.",
    saved_many: "All images saved successfully.",
    zoom: "Zoom",
    preview: "Preview",
    output: "Output",
};

const SPANISH: Labels = Labels {
    app_title: "Escalador por vecino más cercano",
    menu_file: "Archivo",
    menu_view: "Ver",
    menu_edit: "Editar",
    menu_help: "Ayuda",
    load: "Cargar imagen...",
    save: "Guardar imagen",
    save_all: "Guardar todas",
    process: "Procesar imagen",
    import_settings: "Importar ajustes...",
    export_settings: "Exportar ajustes...",
    preferences: "Preferencias",
    reset_defaults: "Restablecer valores",
    quit: "Salir",
    about: "Acerca de",
    about_tagline: "Escalado de imágenes por vecino más cercano",
    close: "Cerrar",
    ok: "Aceptar",
    section_file: "Imagen",
    section_size: "Tamaño de salida",
    section_view: "Lienzo",
    scale_factor: "Factor de escala:",
    width: "Ancho:",
    height: "Alto:",
    background: "Color de fondo",
    always_on_top: "Siempre visible",
    load_mode: "Carga",
    sync_mode: "Aplicar campos",
    input_errors: "Entrada no válida",
    success_toast: "Aviso breve al guardar",
    toast_duration: "Aviso (ms)",
    scale_step: "Paso de flecha",
    min_step_scale: "Mínimo de flecha",
    language: "Idioma",
    placeholder: "Cargue o arrastre una imagen para empezar",
    drop_hint: "Suelte las imágenes para cargarlas",
    error_title: "Error",
    success_title: "Éxito",
    invalid_input: "Valor no válido. Introduzca un número válido.",
    save_failed: "Error al guardar las imágenes",
    load_failed: "Error al cargar las imágenes",
    saved_one: "Imagen guardada correctamente.",
    saved_many: "Todas las imágenes se guardaron correctamente.",
    zoom: "Zoom",
    preview: "Vista previa",
    output: "Salida",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &ENGLISH,
        Language::Spanish => &SPANISH,
    }
}
