//! Phosphor icon names known to the gallery.

pub const ICON_NAMES: &[&str] = &[
    "acorn", "activity", "address-book", "approximate-equals", "archive", "archive-box",
    "arrow-arc-left", "arrow-arc-right", "arrow-bend-double-up-left", "arrow-bend-double-up-right",
    "arrow-bend-down-left", "arrow-bend-down-right", "arrow-bend-left-down", "arrow-bend-left-up",
    "arrow-bend-right-down", "arrow-bend-right-up", "arrow-bend-up-left", "arrow-bend-up-right",
    "arrow-circle-down", "arrow-circle-down-left", "arrow-circle-down-right", "arrow-circle-left",
    "arrow-circle-right", "arrow-circle-up", "arrow-circle-up-left", "arrow-circle-up-right",
    "arrow-clockwise", "arrow-counter-clockwise", "arrow-down", "arrow-down-left",
    "arrow-down-right", "arrow-elbow-down-left", "arrow-elbow-down-right", "arrow-elbow-left",
    "arrow-elbow-left-down", "arrow-elbow-left-up", "arrow-elbow-right", "arrow-elbow-right-down",
    "arrow-elbow-right-up", "arrow-elbow-up-left", "arrow-elbow-up-right", "arrow-fat-down",
    "arrow-fat-left", "arrow-fat-line-down", "arrow-fat-line-left", "arrow-fat-line-right",
    "arrow-fat-line-up", "arrow-fat-lines-down", "arrow-fat-lines-left", "arrow-fat-lines-right",
    "arrow-fat-lines-up", "arrow-fat-right", "arrow-fat-up", "arrow-left", "arrow-line-down",
    "arrow-line-down-left", "arrow-line-down-right", "arrow-line-left", "arrow-line-right",
    "arrow-line-up", "arrow-line-up-left", "arrow-line-up-right", "arrow-right",
    "arrow-square-down", "arrow-square-down-left", "arrow-square-down-right", "arrow-square-in",
    "arrow-square-left", "arrow-square-out", "arrow-square-right", "arrow-square-up",
    "arrow-square-up-left", "arrow-square-up-right", "arrow-u-down-left", "arrow-u-down-right",
    "arrow-u-left-down", "arrow-u-left-up", "arrow-u-right-down", "arrow-u-right-up",
    "arrow-u-up-left", "arrow-u-up-right", "arrow-up", "arrow-up-left", "arrow-up-right",
    "arrows-clockwise", "arrows-counter-clockwise", "arrows-down-up", "arrows-in",
    "arrows-in-cardinal", "arrows-in-line-horizontal", "arrows-in-line-vertical",
    "arrows-in-simple", "arrows-left-right", "arrows-out", "arrows-out-cardinal",
    "arrows-out-line-horizontal", "arrows-out-line-vertical", "arrows-out-simple", "article",
    "article-medium", "article-ny-times", "atom", "backspace", "bank", "battery-charging",
    "battery-charging-vertical", "battery-empty", "battery-full", "battery-high", "battery-low",
    "battery-medium", "battery-plus", "battery-plus-vertical", "battery-warning",
    "battery-warning-vertical", "bell", "bell-ringing", "bell-simple", "bell-simple-ringing",
    "bell-simple-slash", "bell-slash", "bookmark", "bookmark-simple", "bookmarks",
    "bookmarks-simple", "briefcase", "briefcase-metal", "browser", "browsers", "bug", "bug-beetle",
    "bug-droid", "calculator", "calendar", "calendar-blank", "calendar-check", "calendar-dot",
    "calendar-dots", "calendar-heart", "calendar-minus", "calendar-plus", "calendar-slash",
    "calendar-star", "calendar-x", "camera", "camera-rotate", "camera-slash", "cardholder",
    "caret-circle-double-down", "caret-circle-double-left", "caret-circle-double-right",
    "caret-circle-double-up", "caret-circle-down", "caret-circle-left", "caret-circle-right",
    "caret-circle-up", "caret-double-down", "caret-double-left", "caret-double-right",
    "caret-double-up", "caret-down", "caret-left", "caret-right", "caret-up", "caret-up-down",
    "cell-signal-full", "cell-signal-high", "cell-signal-low", "cell-signal-medium",
    "cell-signal-none", "cell-signal-slash", "cell-signal-x", "chart-bar", "chart-bar-horizontal",
    "chart-donut", "chart-line", "chart-line-down", "chart-line-up", "chart-pie",
    "chart-pie-slice", "chart-polar", "chart-scatter", "chat", "chat-circle", "chat-circle-dots",
    "chat-dots", "chat-square", "chat-square-dots", "chat-square-text", "chat-text", "clock",
    "clock-afternoon", "clock-clockwise", "clock-counter-clockwise", "cloud", "cloud-arrow-down",
    "cloud-arrow-up", "cloud-check", "cloud-lightning", "cloud-moon", "cloud-rain", "cloud-slash",
    "cloud-snow", "cloud-sun", "coin", "coin-vertical", "coins", "computer-tower", "cpu",
    "credit-card", "currency-btc", "currency-circle-dollar", "currency-cny", "currency-dollar",
    "currency-dollar-simple", "currency-eth", "currency-eur", "currency-gbp", "currency-inr",
    "currency-jpy", "currency-krw", "currency-kzt", "currency-ngn", "currency-rub", "database",
    "desktop", "desktop-tower", "device-mobile", "device-mobile-camera", "device-mobile-slash",
    "device-mobile-speaker", "device-tablet", "device-tablet-camera", "device-tablet-speaker",
    "devices", "divide", "dot", "dots-nine", "dots-six", "dots-six-vertical", "dots-three",
    "dots-three-circle", "dots-three-circle-vertical", "dots-three-outline",
    "dots-three-outline-vertical", "dots-three-vertical", "download", "download-simple", "eject",
    "eject-simple", "empty", "envelope", "envelope-open", "envelope-simple",
    "envelope-simple-open", "equals", "eyedropper", "eyedropper-sample", "fast-forward",
    "fast-forward-circle", "file", "file-archive", "file-arrow-down", "file-arrow-up",
    "file-audio", "file-cloud", "file-code", "file-css", "file-csv", "file-doc", "file-dotted",
    "file-html", "file-image", "file-ini", "file-jpg", "file-js", "file-jsx", "file-lock",
    "file-magnifying-glass", "file-minus", "file-pdf", "file-plus", "file-png", "file-ppt",
    "file-rs", "file-search", "file-text", "file-ts", "file-tsx", "file-txt", "file-video",
    "file-x", "file-xls", "file-zip", "files", "film-script", "film-slate", "film-strip",
    "fingerprint", "fingerprint-simple", "floppy-disk", "floppy-disk-back", "folder",
    "folder-dotted", "folder-lock", "folder-minus", "folder-open", "folder-plus", "folder-simple",
    "folder-simple-dotted", "folder-simple-lock", "folder-simple-minus", "folder-simple-open",
    "folder-simple-plus", "folder-simple-star", "folder-simple-user", "folder-star", "folder-user",
    "folders", "funnel", "funnel-simple", "game-controller", "gauge", "gear", "gear-six",
    "greater-than", "greater-than-or-equal", "hand-arrow-down", "hand-arrow-up", "hand-coins",
    "hand-deposit", "hand-withdraw", "hard-drive", "hard-drives", "hdmi-logo", "headphones",
    "headset", "hourglass", "hourglass-high", "hourglass-low", "hourglass-medium",
    "hourglass-simple", "hourglass-simple-high", "hourglass-simple-low", "hourglass-simple-medium",
    "image", "image-square", "images", "images-square", "infinity", "intersection", "invoice",
    "keyboard", "laptop", "lectern", "less-than", "lightbulb", "lightbulb-filament", "lightning",
    "lightning-slash", "list", "list-bullets", "list-checks", "list-dashes", "list-numbers",
    "list-plus", "lock", "lock-key", "lock-key-open", "lock-laminated", "lock-laminated-open",
    "lock-open", "lock-simple", "lock-simple-open", "magnifying-glass", "magnifying-glass-minus",
    "magnifying-glass-plus", "memory", "microphone", "microphone-slash", "microphone-stage",
    "minus", "minus-circle", "minus-square", "monitor", "monitor-play", "moon", "moon-stars",
    "mouse", "mouse-simple", "navigation-arrow", "newspaper", "newspaper-clipping", "note",
    "note-blank", "note-pencil", "notebook", "notepad", "notification", "package", "paint-brush",
    "paint-brush-broad", "paint-bucket", "palette", "paper-plane", "paper-plane-right",
    "paper-plane-tilt", "paperclip", "paperclip-horizontal", "pause", "pause-circle", "paw-print",
    "pen", "pen-nib", "pen-nib-straight", "pencil", "pencil-circle", "pencil-line",
    "pencil-simple", "pencil-simple-line", "percent", "phone", "phone-call", "phone-disconnect",
    "phone-incoming", "phone-outgoing", "phone-slash", "phone-x", "play", "play-circle", "plus",
    "plus-circle", "plus-minus", "plus-square", "power", "printer", "projector-screen",
    "projector-screen-chart", "push-pin", "push-pin-slash", "qr-code", "queue", "radio",
    "radio-button", "record", "repeat", "repeat-once", "rewind", "rewind-circle", "robot", "rss",
    "rss-simple", "scissors", "scooter", "screencast", "selection", "selection-all",
    "selection-background", "selection-foreground", "selection-inverse", "selection-plus",
    "selection-slash", "share", "share-network", "shield", "shield-check", "shield-slash",
    "shield-warning", "shopping-cart-simple", "shovel", "shrimp", "shuffle", "shuffle-angular",
    "shuffle-simple", "sidebar", "sidebar-simple", "sign-in", "sign-out", "sim-card", "skip-back",
    "skip-back-circle", "skip-forward", "skip-forward-circle", "sliders", "sliders-horizontal",
    "sneaker", "sneaker-move", "sock", "solar-panel", "solar-roof", "sort-ascending",
    "sort-descending", "speaker-high", "speaker-low", "speaker-none", "speaker-simple-high",
    "speaker-simple-low", "speaker-simple-none", "speaker-simple-slash", "speaker-simple-x",
    "speaker-slash", "speaker-x", "spinner", "spinner-gap", "square", "square-half",
    "square-half-bottom", "square-logo", "square-split-horizontal", "square-split-vertical",
    "squares-four", "stack", "stack-minus", "stack-overflow-logo", "stack-plus", "stack-simple",
    "stairs", "star", "star-half", "steps", "stool", "stop", "stop-circle", "storefront",
    "stripe-logo", "sun", "sun-dim", "sun-horizon", "t-shirt", "table", "tablet", "tag",
    "tag-chevron", "tag-simple", "target", "tea-bag", "terminal", "terminal-window", "text-aa",
    "text-align-center", "text-align-justify", "text-align-left", "text-align-right",
    "text-bolder", "text-h-five", "text-h-four", "text-h-one", "text-h-six", "text-h-three",
    "text-h-two", "text-indent", "text-italic", "text-outdent", "text-strikethrough", "text-t",
    "text-underline", "thermometer", "thermometer-cold", "thermometer-hot", "thermometer-simple",
    "ticket", "timer", "tip-jar", "tire", "toggle-left", "toggle-right", "toolbox", "tote",
    "tote-simple", "towel", "tractor", "trademark", "trademark-registered", "trash",
    "trash-simple", "tray", "tray-arrow-down", "tray-arrow-up", "tree", "tree-evergreen",
    "tree-palm", "tree-structure", "trend-down", "trend-up", "triangle", "trophy", "truck",
    "truck-trailer", "umbrella", "umbrella-simple", "upload", "upload-simple", "usb", "user",
    "user-check", "user-circle", "user-circle-check", "user-circle-gear", "user-circle-minus",
    "user-circle-plus", "user-focus", "user-gear", "user-list", "user-minus", "user-plus",
    "user-rectangle", "user-square", "user-switch", "users", "users-four", "users-three",
    "vibrate", "video", "video-camera", "video-camera-slash", "voicemail", "wall", "wallet",
    "warehouse", "warning", "warning-circle", "warning-diamond", "warning-octagon",
    "washing-machine", "watch", "webcam", "webcam-slash", "wifi-high", "wifi-low", "wifi-medium",
    "wifi-none", "wifi-slash", "wifi-x", "windmill", "windows-logo", "wine", "wrench", "x",
    "x-circle", "x-square", "yarn", "yin-yang", "zap",
];
